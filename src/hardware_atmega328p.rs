//! Memory-mapped TWI registers of the ATMega328P.

use crate::config::Config;
use crate::driver::Twi;
use crate::registers::{Register, RegisterBlock};

/// The address of the 2-wire bit rate register
pub const TWBR: *mut u8 = 0x00B8 as *mut u8;

/// The address of the 2-wire status register
pub const TWSR: *mut u8 = 0x00B9 as *mut u8;

/// The address of the 2-wire data register
pub const TWDR: *mut u8 = 0x00BB as *mut u8;

/// The address of the 2-wire control register
pub const TWCR: *mut u8 = 0x00BC as *mut u8;

/// The address of the port C data direction register (SDA = PC4, SCL = PC5)
pub const DDRC: *mut u8 = 0x0027 as *mut u8;

/// The address of the port C output register
pub const PORTC: *mut u8 = 0x0028 as *mut u8;

/// Volatile access to the on-chip TWI peripheral.
///
/// There is exactly one TWI unit, so hand out at most one `Hardware` and
/// never touch the bus from an interrupt handler while it is in use.
#[derive(Debug)]
pub struct Hardware {
    _private: (),
}

impl Hardware {
    /// # Safety
    ///
    /// The caller must ensure no other code accesses the TWI or port C
    /// direction/output registers while the returned value is alive.
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }

    fn address(register: Register) -> *mut u8 {
        match register {
            Register::Twbr => TWBR,
            Register::Twsr => TWSR,
            Register::Twdr => TWDR,
            Register::Twcr => TWCR,
            Register::Ddr => DDRC,
            Register::Port => PORTC,
        }
    }
}

impl RegisterBlock for Hardware {
    fn read(&mut self, register: Register) -> u8 {
        unsafe { Self::address(register).read_volatile() }
    }

    fn write(&mut self, register: Register, value: u8) {
        unsafe { Self::address(register).write_volatile(value) }
    }
}

/// Takes the TWI peripheral and initializes it for [`Config::ATMEGA328P`].
///
/// # Safety
///
/// See [`Hardware::steal`]. Call once at startup.
pub unsafe fn init() -> Twi<Hardware> {
    let mut twi = Twi::new(Hardware::steal(), Config::ATMEGA328P);
    twi.init();
    twi
}
