//! Error types for the ADAU1361 driver.

use super::clock::SampleRateFamily;

/// Invalid static configuration: an unsupported sample rate or master clock.
///
/// The lower-level driver treats these as programming errors and panics with
/// the [`Display`](core::fmt::Display) text; the high-level controller
/// reports them as [`Error::Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Sample rate belongs to neither the 48 kHz nor the 44.1 kHz family.
    #[error("Bad Fs: {0} Hz")]
    BadFs(u32),
    /// Master clock has no PLL setting for the requested family.
    #[error("Wrong Master Clock with Fs {family} Series: {mclock} Hz")]
    WrongMasterClock {
        family: SampleRateFamily,
        mclock: u32,
    },
}

/// Errors reported by the high-level [`Adau1361`](super::Adau1361) controller.
#[derive(Debug, thiserror::Error)]
pub enum Error<E: core::fmt::Debug> {
    /// The I2C transport failed.
    #[error("I2C transfer failed: {0:?}")]
    I2c(E),
    /// The configuration was rejected before any bus traffic.
    #[error("invalid configuration: {0}")]
    Config(ConfigError),
    /// Nothing acknowledged the codec's address.
    #[error("no device acknowledged the codec address")]
    DeviceNotFound,
    /// The PLL did not report lock within the configured number of polls.
    #[error("PLL did not lock")]
    PllLockTimeout,
}

impl<E: core::fmt::Debug> From<ConfigError> for Error<E> {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}
