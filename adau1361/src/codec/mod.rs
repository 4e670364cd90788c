//! ADAU1361 audio codec driver module.
//!
//! Two layers over any [`embedded_hal::i2c::I2c`]:
//!
//! - [`Adau1361Lower`]: one method per register operation (PLL setup, lock
//!   polling, gains, converter rates). Stateless apart from the bus handle.
//! - [`Adau1361`]: start-up sequencing, bounded lock wait and a gain/mute
//!   cache. Needs an [`embedded_hal::delay::DelayNs`].
//!
//! # Feature gate
//!
//! [`Adau1361`] and [`Config`] are available when the `controller` feature
//! is enabled (on by default).

mod clock;
mod error;
mod gain;
mod lower;
mod pll;
pub mod registers;

#[cfg(feature = "controller")]
mod adau1361;

pub use clock::{ConverterRate, SampleRateFamily};
pub use error::{ConfigError, Error};
pub use gain::{input_code, output_code, Channel};
pub use lower::{probe, Adau1361Lower, I2sRole, SIGNAL_PATH_LEN};
pub use pll::PllParameters;

#[cfg(feature = "controller")]
pub use adau1361::{Adau1361, Config, GainState};
