//! Waiting for the TWI hardware to finish an operation.

use bit_field::BitField;

use crate::registers::{Register, RegisterBlock, TWINT};

/// How the driver blocks until TWINT is set.
///
/// The driver itself never gives up on a transfer. A strategy that wants to
/// bound the wait has to do so outside the transfer contract, e.g. by
/// resetting the device from a watchdog.
pub trait WaitStrategy {
    /// Returns once the current TWI operation has completed.
    fn wait_for_completion<R: RegisterBlock>(&mut self, regs: &mut R);
}

/// Awaits TWI hardware availability
///
/// Repeatedly polls the TWCR until it signifies that
/// the TWI hardware has finished its assigned
/// operation, then returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spin;

impl WaitStrategy for Spin {
    fn wait_for_completion<R: RegisterBlock>(&mut self, regs: &mut R) {
        while !regs.read(Register::Twcr).get_bit(TWINT) {
            core::hint::spin_loop();
        }
    }
}
