//! Sample-rate families and converter rate selection.

use core::fmt;

use super::error::ConfigError;
use crate::constants::{FS_44K1_FAMILY, FS_48K_FAMILY, PLL_TARGET_44K1, PLL_TARGET_48K};

/// The two sample-rate lineages the codec core can run from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRateFamily {
    /// 8 / 16 / 24 / 32 / 48 / 96 kHz.
    Fs48k,
    /// 11.025 / 22.05 / 44.1 / 88.2 kHz.
    Fs44k1,
}

impl SampleRateFamily {
    /// Classify a sample rate, rejecting anything outside both families.
    pub fn from_fs(fs: u32) -> Result<Self, ConfigError> {
        if FS_48K_FAMILY.contains(&fs) {
            Ok(Self::Fs48k)
        } else if FS_44K1_FAMILY.contains(&fs) {
            Ok(Self::Fs44k1)
        } else {
            Err(ConfigError::BadFs(fs))
        }
    }

    /// Base sample rate of the family in Hz.
    pub const fn base_rate(self) -> u32 {
        match self {
            Self::Fs48k => 48_000,
            Self::Fs44k1 => 44_100,
        }
    }

    /// Required PLL output frequency in Hz (1024 × base rate).
    pub const fn pll_target(self) -> u32 {
        match self {
            Self::Fs48k => PLL_TARGET_48K,
            Self::Fs44k1 => PLL_TARGET_44K1,
        }
    }
}

impl fmt::Display for SampleRateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fs48k => f.write_str("48kHz"),
            Self::Fs44k1 => f.write_str("44.1kHz"),
        }
    }
}

/// Converter / serial-port sampling rate relative to the family base rate.
///
/// Discriminants are the CONVSR (R17) and SPSR (R64) field encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConverterRate {
    /// fs = base.
    Base = 0,
    /// fs = base / 6.
    Div6 = 1,
    /// fs = base / 4.
    Div4 = 2,
    /// fs = base / 3.
    Div3 = 3,
    /// fs = base / 2.
    Div2 = 4,
    /// fs = base / 1.5.
    Div1_5 = 5,
    /// fs = base × 2.
    Mul2 = 6,
}

impl ConverterRate {
    /// Select the converter rate for a sample rate.
    pub fn from_fs(fs: u32) -> Result<Self, ConfigError> {
        let family = SampleRateFamily::from_fs(fs)?;
        let base = family.base_rate();
        // Work with 2 × fs so the 1.5 divider stays integral.
        let twice = fs * 2;
        let rate = match twice {
            t if t == base * 2 => Self::Base,
            t if t * 3 == base => Self::Div6,
            t if t * 2 == base => Self::Div4,
            t if t * 3 == base * 2 => Self::Div3,
            t if t == base => Self::Div2,
            t if t * 3 == base * 4 => Self::Div1_5,
            t if t == base * 4 => Self::Mul2,
            _ => return Err(ConfigError::BadFs(fs)),
        };
        Ok(rate)
    }

    /// Register field value.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_cover_listed_rates() {
        for fs in FS_48K_FAMILY {
            assert_eq!(SampleRateFamily::from_fs(fs), Ok(SampleRateFamily::Fs48k));
        }
        for fs in FS_44K1_FAMILY {
            assert_eq!(SampleRateFamily::from_fs(fs), Ok(SampleRateFamily::Fs44k1));
        }
    }

    #[test]
    fn unknown_rates_are_bad_fs() {
        assert_eq!(SampleRateFamily::from_fs(192_000), Err(ConfigError::BadFs(192_000)));
        assert_eq!(SampleRateFamily::from_fs(0), Err(ConfigError::BadFs(0)));
        assert_eq!(SampleRateFamily::from_fs(44_000), Err(ConfigError::BadFs(44_000)));
    }

    #[test]
    fn pll_targets_are_1024_fs() {
        assert_eq!(SampleRateFamily::Fs48k.pll_target(), 1024 * 48_000);
        assert_eq!(SampleRateFamily::Fs44k1.pll_target(), 1024 * 44_100);
    }

    #[test]
    fn converter_rates() {
        assert_eq!(ConverterRate::from_fs(8_000), Ok(ConverterRate::Div6));
        assert_eq!(ConverterRate::from_fs(11_025), Ok(ConverterRate::Div4));
        assert_eq!(ConverterRate::from_fs(16_000), Ok(ConverterRate::Div3));
        assert_eq!(ConverterRate::from_fs(22_050), Ok(ConverterRate::Div2));
        assert_eq!(ConverterRate::from_fs(24_000), Ok(ConverterRate::Div2));
        assert_eq!(ConverterRate::from_fs(32_000), Ok(ConverterRate::Div1_5));
        assert_eq!(ConverterRate::from_fs(44_100), Ok(ConverterRate::Base));
        assert_eq!(ConverterRate::from_fs(48_000), Ok(ConverterRate::Base));
        assert_eq!(ConverterRate::from_fs(88_200), Ok(ConverterRate::Mul2));
        assert_eq!(ConverterRate::from_fs(96_000), Ok(ConverterRate::Mul2));
    }

    #[test]
    fn converter_rate_rejects_bad_fs() {
        assert_eq!(ConverterRate::from_fs(192_000), Err(ConfigError::BadFs(192_000)));
    }
}
