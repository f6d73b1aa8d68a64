//! The TWI master driver.

use bit_field::BitField;

use crate::config::Config;
use crate::registers::{
    Register, RegisterBlock, RECEIVE_ACK, RECEIVE_NACK, START, STOP, TRANSMIT, TWPS0, TWPS1,
};
use crate::status::{Ack, Status};
use crate::wait::{Spin, WaitStrategy};
use crate::Direction;

/// Represents the hardware 2-wire interface
///
/// The driver owns its register block, so only one `Twi` can drive a given
/// bus. Operations are synchronous and must be issued in bus order: one
/// [`start`](Self::start), any number of [`write`](Self::write) and
/// [`read`](Self::read) calls, then [`stop`](Self::stop).
pub struct Twi<R, W = Spin> {
    regs: R,
    config: Config,
    wait: W,
}

impl<R: RegisterBlock> Twi<R> {
    /// Creates a new TWI instance that busy-waits on TWINT
    pub fn new(regs: R, config: Config) -> Self {
        Self::with_wait(regs, config, Spin)
    }
}

impl<R: RegisterBlock, W: WaitStrategy> Twi<R, W> {
    /// Creates a new TWI instance with a custom wait strategy
    pub fn with_wait(regs: R, config: Config, wait: W) -> Self {
        Self { regs, config, wait }
    }

    /// Releases the register block.
    pub fn free(self) -> R {
        self.regs
    }

    /// The configuration the bus was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Enables the internal pull-ups on SDA and SCL and sets the SCL frequency.
    ///
    /// Must be called once before any other operation.
    pub fn init(&mut self) {
        let pins = self.config.pull_up_mask();
        let bit_rate = self.config.bit_rate();
        self.regs.modify(Register::Ddr, |ddr| *ddr &= !pins);
        self.regs.modify(Register::Port, |port| *port |= pins);

        self.regs.modify(Register::Twsr, |twsr| {
            twsr.set_bits(TWPS0..=TWPS1, 0);
        });
        self.regs.write(Register::Twbr, bit_rate);
        log_debug!("twi: init, TWBR = {}", bit_rate);
    }

    /// Creates an I2C start condition on the bus.
    ///
    /// Blocks until the hardware reports completion. The resulting status is
    /// not checked; a missing or shorted bus still "completes".
    pub fn start(&mut self) {
        self.regs.write(Register::Twcr, START);
        self.wait.wait_for_completion(&mut self.regs);
    }

    /// Sends one byte (an SLA+R/W header or data) and reports whether the
    /// receiver acknowledged it.
    ///
    /// Only the SLA+W ACK, data ACK and SLA+R ACK status codes yield
    /// [`Ack::Ack`]; every other status, whatever its cause, is
    /// [`Ack::Nack`].
    pub fn write(&mut self, byte: u8) -> Ack {
        self.regs.write(Register::Twdr, byte);
        self.regs.write(Register::Twcr, TRANSMIT);
        self.wait.wait_for_completion(&mut self.regs);

        let ack = Ack::from_status(self.regs.read(Register::Twsr));
        log_trace!("twi: write {=u8:#x} -> {}", byte, ack);
        ack
    }

    /// Receives one byte, answering with ACK (more bytes wanted) or NACK
    /// (last byte).
    ///
    /// The status register is not checked, so a read issued without a
    /// preceding acknowledged SLA+R returns whatever TWDR holds.
    pub fn read(&mut self, ack: Ack) -> u8 {
        let twcr = match ack {
            Ack::Ack => RECEIVE_ACK,
            Ack::Nack => RECEIVE_NACK,
        };
        self.regs.write(Register::Twcr, twcr);
        self.wait.wait_for_completion(&mut self.regs);
        self.regs.read(Register::Twdr)
    }

    /// Creates an I2C stop condition on the bus.
    ///
    /// Does not wait: the hardware delays the next start until the bus has
    /// been released.
    pub fn stop(&mut self) {
        self.regs.write(Register::Twcr, STOP);
    }

    /// Decoded status of the last operation, for callers that need the cause
    /// of a NACK.
    pub fn status(&mut self) -> Option<Status> {
        Status::from_register(self.regs.read(Register::Twsr))
    }

    /// Addresses a device with a single start, header, stop sequence.
    pub fn probe(&mut self, address: u8, direction: Direction) -> Ack {
        self.start();
        let ack = self.write(direction.address_byte(address));
        self.stop();
        ack
    }
}
