//! Simulated TWI peripheral for unit tests.

use std::collections::VecDeque;

use bit_field::BitField;

use crate::registers::{Register, RegisterBlock, TWEA, TWEN, TWINT, TWSTA, TWSTO};

/// Bus activity seen by the simulated peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start,
    Write(u8),
    Read { ack: bool },
    Stop,
}

/// A register block behaving like an ATmega328P TWI master with a set of
/// slaves attached.
pub struct MockBus {
    regs: [u8; 6],
    devices: Vec<u8>,
    rx: VecDeque<u8>,
    latency: u32,
    pending: u32,
    forced_status: Option<u8>,
    in_transaction: bool,
    address_phase: bool,
    receiving: bool,
    twcr_polls: usize,
    pub twcr_writes: Vec<u8>,
    pub writes: Vec<(Register, u8)>,
    pub events: Vec<Event>,
}

impl MockBus {
    /// A bus where exactly `devices` acknowledge their address.
    pub fn new(devices: &[u8]) -> Self {
        let mut regs = [0u8; 6];
        regs[Register::Twsr as usize] = 0xF8;
        Self {
            regs,
            devices: devices.to_vec(),
            rx: VecDeque::new(),
            latency: 0,
            pending: 0,
            forced_status: None,
            in_transaction: false,
            address_phase: false,
            receiving: false,
            twcr_polls: 0,
            twcr_writes: Vec::new(),
            writes: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Number of TWCR polls that report the operation as still running.
    pub fn with_latency(mut self, polls: u32) -> Self {
        self.latency = polls;
        self
    }

    /// Bytes handed out, in order, by read operations.
    pub fn with_rx(mut self, bytes: &[u8]) -> Self {
        self.rx.extend(bytes.iter().copied());
        self
    }

    /// Makes every completed operation report `raw` in TWSR.
    pub fn force_status(&mut self, raw: u8) {
        self.forced_status = Some(raw);
    }

    /// Overwrites a register without triggering any bus activity.
    pub fn set(&mut self, register: Register, value: u8) {
        self.regs[register as usize] = value;
    }

    /// Current register contents, as the hardware holds them.
    pub fn get(&self, register: Register) -> u8 {
        self.regs[register as usize]
    }

    /// Number of TWCR reads so far.
    pub fn twcr_polls(&self) -> usize {
        self.twcr_polls
    }

    /// Addresses of every SLA+W or SLA+R byte sent right after a start.
    pub fn probed_addresses(&self) -> Vec<u8> {
        self.events
            .windows(2)
            .filter_map(|pair| match pair {
                [Event::Start, Event::Write(byte)] => Some(byte >> 1),
                _ => None,
            })
            .collect()
    }

    fn complete(&mut self, status: u8) {
        let twsr = match self.forced_status {
            Some(raw) => raw,
            None => (status & 0xF8) | (self.regs[Register::Twsr as usize] & 0x03),
        };
        self.regs[Register::Twsr as usize] = twsr;
        self.regs[Register::Twcr as usize].set_bit(TWINT, true);
        self.pending = self.latency;
    }

    fn operate(&mut self, twcr: u8) {
        if twcr.get_bit(TWSTA) {
            self.events.push(Event::Start);
            let status = if self.in_transaction { 0x10 } else { 0x08 };
            self.in_transaction = true;
            self.address_phase = true;
            self.receiving = false;
            self.regs[Register::Twcr as usize].set_bit(TWSTA, false);
            self.complete(status);
        } else if twcr.get_bit(TWSTO) {
            self.events.push(Event::Stop);
            self.in_transaction = false;
            self.address_phase = false;
            self.receiving = false;
            // The stop bit clears itself and TWINT is not raised.
            self.regs[Register::Twcr as usize].set_bit(TWSTO, false);
            self.regs[Register::Twsr as usize] = 0xF8;
        } else if self.address_phase {
            let byte = self.regs[Register::Twdr as usize];
            self.events.push(Event::Write(byte));
            self.address_phase = false;
            let present = self.devices.contains(&(byte >> 1));
            let read = byte.get_bit(0);
            self.receiving = read && present;
            let status = match (read, present) {
                (false, true) => 0x18,
                (false, false) => 0x20,
                (true, true) => 0x40,
                (true, false) => 0x48,
            };
            self.complete(status);
        } else if self.receiving {
            let ack = twcr.get_bit(TWEA);
            self.events.push(Event::Read { ack });
            self.regs[Register::Twdr as usize] = self.rx.pop_front().unwrap_or(0xFF);
            self.complete(if ack { 0x50 } else { 0x58 });
        } else {
            let byte = self.regs[Register::Twdr as usize];
            self.events.push(Event::Write(byte));
            self.complete(0x28);
        }
    }
}

impl RegisterBlock for MockBus {
    fn read(&mut self, register: Register) -> u8 {
        if register == Register::Twcr {
            self.twcr_polls += 1;
            if self.pending > 0 {
                self.pending -= 1;
                let mut value = self.regs[Register::Twcr as usize];
                value.set_bit(TWINT, false);
                return value;
            }
        }
        self.regs[register as usize]
    }

    fn write(&mut self, register: Register, value: u8) {
        self.writes.push((register, value));
        if register != Register::Twcr {
            self.regs[register as usize] = value;
            return;
        }
        self.twcr_writes.push(value);
        let mut stored = value;
        stored.set_bit(TWINT, false);
        self.regs[Register::Twcr as usize] = stored;
        if value.get_bit(TWINT) && value.get_bit(TWEN) {
            self.operate(value);
        }
    }
}
