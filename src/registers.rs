//! TWI register identifiers, bit positions and the register access trait.

/// The registers the driver touches.
///
/// `Ddr` and `Port` are the data direction and output registers of the I/O
/// port the SDA and SCL lines live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// 2-wire bit rate register
    Twbr,
    /// 2-wire status register
    Twsr,
    /// 2-wire data register
    Twdr,
    /// 2-wire control register
    Twcr,
    /// Data direction register of the bus port
    Ddr,
    /// Output register of the bus port, doubling as the pull-up enable
    Port,
}

/// TWCR bit: interrupt flag, written as 1 to clear it and start the next operation
pub const TWINT: usize = 7;

/// TWCR bit: enable acknowledge
pub const TWEA: usize = 6;

/// TWCR bit: start condition
pub const TWSTA: usize = 5;

/// TWCR bit: stop condition
pub const TWSTO: usize = 4;

/// TWCR bit: TWI enable
pub const TWEN: usize = 2;

/// TWSR bit: prescaler, high bit
pub const TWPS1: usize = 1;

/// TWSR bit: prescaler, low bit
pub const TWPS0: usize = 0;

/// Builds a TWCR value with the given bits set and every other bit clear.
pub const fn control(bits: &[usize]) -> u8 {
    let mut value = 0u8;
    let mut i = 0;
    while i < bits.len() {
        value |= 1 << bits[i];
        i += 1;
    }
    value
}

/// TWCR: send a start condition
pub const START: u8 = control(&[TWINT, TWSTA, TWEN]);

/// TWCR: transmit the byte in TWDR
pub const TRANSMIT: u8 = control(&[TWINT, TWEN]);

/// TWCR: receive a byte and answer with ACK
pub const RECEIVE_ACK: u8 = control(&[TWINT, TWEN, TWEA]);

/// TWCR: receive a byte and answer with NACK
pub const RECEIVE_NACK: u8 = control(&[TWINT, TWEN]);

/// TWCR: send a stop condition
pub const STOP: u8 = control(&[TWINT, TWSTO, TWEN]);

/// Read and write access to the TWI registers.
///
/// Implemented with volatile pointer access on real hardware and with plain
/// memory in tests.
pub trait RegisterBlock {
    /// Reads the current value of `register`.
    fn read(&mut self, register: Register) -> u8;

    /// Writes `value` to `register`.
    fn write(&mut self, register: Register, value: u8);

    /// Read-modify-write of `register`.
    fn modify<F>(&mut self, register: Register, f: F)
    where
        F: FnOnce(&mut u8),
    {
        let mut value = self.read(register);
        f(&mut value);
        self.write(register, value);
    }
}

impl<T: RegisterBlock + ?Sized> RegisterBlock for &mut T {
    fn read(&mut self, register: Register) -> u8 {
        (**self).read(register)
    }

    fn write(&mut self, register: Register, value: u8) {
        (**self).write(register, value)
    }
}
