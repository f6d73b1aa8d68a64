//! Decoding of the TWI status register.

/// Mask selecting the status code bits (TWS7..TWS3) of TWSR.
pub const STATUS_MASK: u8 = 0xF8;

/// Outcome of a byte transfer.
///
/// The discriminants are part of the driver's contract: `Ack as u8` is `0`
/// and `Nack as u8` is `1`. Note that zero means success.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ack {
    /// The receiver acknowledged the byte.
    Ack = 0,
    /// Anything else: no device, data NACK, bus error or lost arbitration.
    Nack = 1,
}

impl Ack {
    /// Classifies a raw TWSR value.
    ///
    /// Only SLA+W ACK (0x18), data ACK (0x28) and SLA+R ACK (0x40) count as
    /// acknowledged. The prescaler bits are ignored.
    pub fn from_status(raw: u8) -> Self {
        match Status::from_register(raw) {
            Some(
                Status::WriteHeaderTransmittedAckReceived
                | Status::DataTransmittedAckReceived
                | Status::ReadHeaderTransmittedAckReceived,
            ) => Self::Ack,
            _ => Self::Nack,
        }
    }

    /// `true` for [`Ack::Ack`].
    pub fn is_ack(self) -> bool {
        self == Self::Ack
    }
}

/// Represents status variants of the 2-wire status register in master mode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    BusError = 0x00,
    StartTransmitted = 0x08,
    RepeatedStartTransmitted = 0x10,
    WriteHeaderTransmittedAckReceived = 0x18,
    WriteHeaderTransmittedNackReceived = 0x20,
    DataTransmittedAckReceived = 0x28,
    DataTransmittedNackReceived = 0x30,
    ArbitrationLost = 0x38,
    ReadHeaderTransmittedAckReceived = 0x40,
    ReadHeaderTransmittedNackReceived = 0x48,
    DataReceivedAckTransmitted = 0x50,
    DataReceivedNackTransmitted = 0x58,
    NoInformation = 0xF8,
}

impl Status {
    /// Masks a raw TWSR value down to its status code and decodes it.
    ///
    /// Returns `None` for codes that have no master-mode meaning (the slave
    /// receiver and transmitter codes).
    pub fn from_register(raw: u8) -> Option<Self> {
        match raw & STATUS_MASK {
            0x00 => Some(Self::BusError),
            0x08 => Some(Self::StartTransmitted),
            0x10 => Some(Self::RepeatedStartTransmitted),
            0x18 => Some(Self::WriteHeaderTransmittedAckReceived),
            0x20 => Some(Self::WriteHeaderTransmittedNackReceived),
            0x28 => Some(Self::DataTransmittedAckReceived),
            0x30 => Some(Self::DataTransmittedNackReceived),
            0x38 => Some(Self::ArbitrationLost),
            0x40 => Some(Self::ReadHeaderTransmittedAckReceived),
            0x48 => Some(Self::ReadHeaderTransmittedNackReceived),
            0x50 => Some(Self::DataReceivedAckTransmitted),
            0x58 => Some(Self::DataReceivedNackTransmitted),
            0xF8 => Some(Self::NoInformation),
            _ => None,
        }
    }
}
