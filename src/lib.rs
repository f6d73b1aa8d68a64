#![cfg_attr(not(test), no_std)]

//! A minimal AVR TWI (I2C) master driver and bus scanner.
//!
//! The driver talks to the TWI peripheral through a [`RegisterBlock`], so the
//! same protocol code runs against the memory-mapped registers of a real
//! ATmega328P (see the `hardware-atmega328p` feature) or against a simulated
//! register set.
//!
//! Every transfer must be bracketed by [`Twi::start`] and [`Twi::stop`], and
//! only one caller may drive the bus at a time. There is no locking and no
//! timeout: a bus that never completes a transfer hangs the caller.

#[macro_use]
mod logging;

pub mod config;
pub mod driver;
pub mod registers;
pub mod scan;
pub mod status;
pub mod wait;

#[cfg(feature = "hardware-atmega328p")]
pub mod hardware_atmega328p;

#[cfg(test)]
mod mock;

pub use config::{Config, ConfigError};
pub use driver::Twi;
pub use registers::{Register, RegisterBlock};
pub use status::{Ack, Status};
pub use wait::{Spin, WaitStrategy};

/// Represents data direction used for the R/W bit in the I2C header.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Write = 0,
    Read = 1,
}

impl Direction {
    /// Builds the SLA+R or SLA+W byte sent right after a start condition.
    pub const fn address_byte(self, address: u8) -> u8 {
        (address << 1) | self as u8
    }
}
