//! Bus scanner.

use core::ops::Range;

use ufmt::{uWrite, uwrite};

use crate::driver::Twi;
use crate::registers::RegisterBlock;
use crate::wait::WaitStrategy;
use crate::Direction;

/// Addresses probed by a scan. 0x00..0x08 and 0x78..0x80 are reserved.
pub const SCAN_RANGE: Range<u8> = 8..120;

/// Iterator over the addresses in [`SCAN_RANGE`] that acknowledge an SLA+W
/// header, in ascending order.
///
/// Each address is probed exactly once, when the iterator reaches it.
pub struct Devices<'a, R, W> {
    twi: &'a mut Twi<R, W>,
    candidates: Range<u8>,
}

impl<R: RegisterBlock, W: WaitStrategy> Iterator for Devices<'_, R, W> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        for address in self.candidates.by_ref() {
            let ack = self.twi.probe(address, Direction::Write);
            log_trace!("scan: {=u8:#x} -> {}", address, ack);
            if ack.is_ack() {
                return Some(address);
            }
        }
        None
    }
}

/// Probes every valid 7-bit address and yields the ones that respond.
pub fn devices<R: RegisterBlock, W: WaitStrategy>(twi: &mut Twi<R, W>) -> Devices<'_, R, W> {
    Devices {
        twi,
        candidates: SCAN_RANGE,
    }
}

/// Scans the bus and writes every responding address to `out`.
///
/// Each address is emitted as `"\r\n"` followed by its value in lowercase
/// hex without padding, e.g. `"\r\n3c\r\n57"`. Non-responding addresses are
/// skipped silently. The only possible error is one from `out`, which aborts
/// the scan.
pub fn scan<R, W, O>(twi: &mut Twi<R, W>, out: &mut O) -> Result<(), O::Error>
where
    R: RegisterBlock,
    W: WaitStrategy,
    O: uWrite + ?Sized,
{
    for address in devices(twi) {
        log_debug!("scan: found {=u8:#x}", address);
        out.write_str("\r\n")?;
        uwrite!(*out, "{:x}", address)?;
    }
    Ok(())
}
