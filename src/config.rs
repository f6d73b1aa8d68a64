//! Compile-time bus configuration.

/// System clock frequency the bit rate is derived from.
pub const F_CPU: u32 = 16_000_000;

/// Target SCL frequency.
pub const F_SCL: u32 = 100_000;

/// Bit rate register value for [`F_CPU`] and [`F_SCL`] on an ATmega328P.
pub const TWI_BIT_RATE_REG: u8 = Config::ATMEGA328P.bit_rate();

/// Reasons a clock/pin combination cannot drive the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The SCL frequency is zero.
    ZeroSclFrequency,
    /// `cpu_hz / scl_hz` is below 16, so TWBR would be negative.
    SclTooFast,
    /// `((cpu_hz / scl_hz) - 16) / 2` does not fit in TWBR.
    SclTooSlow,
    /// A pin number is not a bit of an 8-bit port.
    PinOutOfRange,
    /// SDA and SCL name the same pin.
    SamePin,
}

/// Clock and pin parameters of a TWI bus.
///
/// Validated and reduced to register values on construction, so
/// [`Twi::init`](crate::Twi::init) only copies them into the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    cpu_hz: u32,
    scl_hz: u32,
    sda_pin: u8,
    scl_pin: u8,
    bit_rate: u8,
    pull_up_mask: u8,
}

impl Config {
    /// Arduino Uno: SDA on PC4, SCL on PC5.
    pub const ATMEGA328P: Self = Self::new(F_CPU, F_SCL, 4, 5);

    /// Builds a configuration from clock frequencies in Hz and the bit
    /// numbers of SDA and SCL within the bus port.
    ///
    /// Panics on an invalid combination, which turns into a build error when
    /// evaluated in a `const`. Use [`try_new`](Self::try_new) for values
    /// known only at run time.
    pub const fn new(cpu_hz: u32, scl_hz: u32, sda_pin: u8, scl_pin: u8) -> Self {
        match Self::try_new(cpu_hz, scl_hz, sda_pin, scl_pin) {
            Ok(config) => config,
            Err(ConfigError::ZeroSclFrequency) => panic!("SCL frequency is zero"),
            Err(ConfigError::SclTooFast) => panic!("SCL frequency too high for the system clock"),
            Err(ConfigError::SclTooSlow) => panic!("SCL frequency too low for TWBR"),
            Err(ConfigError::PinOutOfRange) => panic!("bus pin is not a port bit"),
            Err(ConfigError::SamePin) => panic!("SDA and SCL are the same pin"),
        }
    }

    /// Builds a configuration, reporting an invalid combination instead of
    /// panicking.
    ///
    /// TWBR is computed for a prescaler of 1: `((cpu_hz / scl_hz) - 16) / 2`.
    pub const fn try_new(
        cpu_hz: u32,
        scl_hz: u32,
        sda_pin: u8,
        scl_pin: u8,
    ) -> Result<Self, ConfigError> {
        if scl_hz == 0 {
            return Err(ConfigError::ZeroSclFrequency);
        }
        let ratio = cpu_hz / scl_hz;
        if ratio < 16 {
            return Err(ConfigError::SclTooFast);
        }
        let bit_rate = (ratio - 16) / 2;
        if bit_rate > u8::MAX as u32 {
            return Err(ConfigError::SclTooSlow);
        }
        if sda_pin >= 8 || scl_pin >= 8 {
            return Err(ConfigError::PinOutOfRange);
        }
        if sda_pin == scl_pin {
            return Err(ConfigError::SamePin);
        }
        Ok(Self {
            cpu_hz,
            scl_hz,
            sda_pin,
            scl_pin,
            bit_rate: bit_rate as u8,
            pull_up_mask: (1 << sda_pin) | (1 << scl_pin),
        })
    }

    /// System clock in Hz.
    pub const fn cpu_hz(&self) -> u32 {
        self.cpu_hz
    }

    /// Target SCL frequency in Hz.
    pub const fn scl_hz(&self) -> u32 {
        self.scl_hz
    }

    /// Bit number of SDA within the bus port.
    pub const fn sda_pin(&self) -> u8 {
        self.sda_pin
    }

    /// Bit number of SCL within the bus port.
    pub const fn scl_pin(&self) -> u8 {
        self.scl_pin
    }

    /// TWBR value for a prescaler of 1.
    pub const fn bit_rate(&self) -> u8 {
        self.bit_rate
    }

    /// Port bits of the SDA and SCL lines.
    pub const fn pull_up_mask(&self) -> u8 {
        self.pull_up_mask
    }
}
