//! PLL parameter search and R1 register encoding.
//!
//! The ADAU1361 PLL multiplies its input clock by `(R + N/M) / X`
//! (fractional mode) or `R / X` (integer mode). The core needs exactly
//! 1024 × fs, so the search looks for divider values that hit
//! [`SampleRateFamily::pll_target`] for a given master clock.

use super::clock::SampleRateFamily;
use super::error::ConfigError;
use super::registers as reg;
use crate::constants::{PLL_INPUT_MAX, PLL_M_MAX, SUPPORTED_MCLK};

/// Divider settings of the R1 PLL control block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PllParameters {
    /// Input pre-divider, 1..=4.
    pub x: u8,
    /// Integer multiplier, 1..=8.
    pub r: u8,
    /// Fractional numerator. Always below `m` in fractional mode.
    pub n: u16,
    /// Fractional denominator. Non-zero in fractional mode.
    pub m: u16,
    /// Fractional (`true`) or integer (`false`) mode.
    pub fractional: bool,
    /// PLLEN bit.
    pub enabled: bool,
}

/// Datasheet register images for clocks where the datasheet's table uses
/// a different (but equivalent) encoding than [`PllParameters::solve`].
///
/// The integer-mode rows carry the 27 MHz M/N values, which the codec
/// ignores; the 44.1 kHz rows use 675/1000 rather than 27/40.
const DATASHEET_IMAGES: [(SampleRateFamily, u32, PllParameters); 4] = [
    (
        SampleRateFamily::Fs48k,
        12_288_000,
        PllParameters { x: 1, r: 4, n: 721, m: 1125, fractional: false, enabled: true },
    ),
    (
        SampleRateFamily::Fs48k,
        24_576_000,
        PllParameters { x: 1, r: 2, n: 721, m: 1125, fractional: false, enabled: true },
    ),
    (
        SampleRateFamily::Fs44k1,
        12_288_000,
        PllParameters { x: 1, r: 3, n: 675, m: 1000, fractional: true, enabled: true },
    ),
    (
        SampleRateFamily::Fs44k1,
        24_576_000,
        PllParameters { x: 2, r: 3, n: 675, m: 1000, fractional: true, enabled: true },
    ),
];

impl PllParameters {
    /// The image written by `disable_pll`: PLL powered down.
    pub const POWER_DOWN: Self = Self {
        x: 1,
        r: 2,
        n: 12,
        m: 253,
        fractional: false,
        enabled: false,
    };

    /// Search divider values producing `target` Hz from `mclock` Hz.
    ///
    /// Picks the smallest X that brings the PLL input to at most 13.5 MHz,
    /// takes R as the integer part of the required ratio and approximates
    /// the remainder as N/M with M ≤ 8191 using continued fractions.
    /// Ratios outside 1..9 saturate R and drop the fraction.
    ///
    /// Returns `None` only when no X divider can bring the clock in range.
    pub fn solve(mclock: u32, target: u32) -> Option<Self> {
        if mclock == 0 {
            return None;
        }
        let x = (1..=4u8).find(|&x| mclock as u64 <= PLL_INPUT_MAX as u64 * x as u64)?;

        // ratio = target * x / mclock, kept as an exact rational.
        let num = target as u64 * x as u64;
        let den = mclock as u64;
        let whole = num / den;
        let (mut r, rem) = match whole {
            0 => (1u8, 0),
            1..=8 => (whole as u8, num % den),
            _ => (8u8, 0),
        };

        let (mut n, m) = best_fraction(rem, den, PLL_M_MAX as u64);
        if n >= m {
            // The bound rounded the fraction up to 1/1.
            r = (r + 1).min(8);
            n = 0;
        }

        let fractional = n != 0;
        Some(Self {
            x,
            r,
            n: if fractional { n as u16 } else { 0 },
            m: if fractional { m as u16 } else { 0 },
            fractional,
            enabled: true,
        })
    }

    /// PLL setting for a supported master clock in the given family.
    ///
    /// Master clocks outside [`SUPPORTED_MCLK`] are rejected with
    /// [`ConfigError::WrongMasterClock`].
    pub fn for_clock(family: SampleRateFamily, mclock: u32) -> Result<Self, ConfigError> {
        let wrong = ConfigError::WrongMasterClock { family, mclock };
        if !SUPPORTED_MCLK.contains(&mclock) {
            return Err(wrong);
        }
        if let Some(&(_, _, image)) = DATASHEET_IMAGES
            .iter()
            .find(|(f, clk, _)| *f == family && *clk == mclock)
        {
            return Ok(image);
        }
        Self::solve(mclock, family.pll_target()).ok_or(wrong)
    }

    /// R1 byte 4: `R[6:3] | (X−1)[2:1] | TYPE[0]`, with R = 8 encoded as 0.
    pub const fn control(&self) -> u8 {
        let r = if self.r >= 8 { 0 } else { self.r };
        ((r & 0x0F) << 3) | ((self.x.saturating_sub(1) & 0x03) << 1) | self.fractional as u8
    }

    /// The 6-byte R1 payload.
    pub const fn registers(&self) -> [u8; reg::PLL_CONTROL_LEN] {
        [
            (self.m >> 8) as u8,
            self.m as u8,
            (self.n >> 8) as u8,
            self.n as u8,
            self.control(),
            if self.enabled { reg::PLL_ENABLE } else { 0 },
        ]
    }

    /// Complete R1 write command: register address followed by the payload.
    pub const fn command(&self) -> [u8; 2 + reg::PLL_CONTROL_LEN] {
        let addr = reg::address_bytes(reg::PLL_CONTROL);
        let p = self.registers();
        [addr[0], addr[1], p[0], p[1], p[2], p[3], p[4], p[5]]
    }

    /// Decode an R1 payload (as written, or as read back from the codec).
    pub fn from_registers(bytes: &[u8; reg::PLL_CONTROL_LEN]) -> Self {
        let control = bytes[4];
        let r = (control >> 3) & 0x0F;
        Self {
            m: u16::from_be_bytes([bytes[0], bytes[1]]),
            n: u16::from_be_bytes([bytes[2], bytes[3]]),
            x: ((control >> 1) & 0x03) + 1,
            r: if r == 0 { 8 } else { r },
            fractional: control & 1 != 0,
            enabled: bytes[reg::PLL_STATUS_BYTE] & reg::PLL_ENABLE != 0,
        }
    }

    /// PLL output frequency in Hz for the given input clock.
    pub fn output_hz(&self, mclock: u32) -> f64 {
        let input = mclock as f64 / self.x as f64;
        if self.fractional && self.m != 0 {
            input * (self.r as f64 + self.n as f64 / self.m as f64)
        } else {
            input * self.r as f64
        }
    }
}

/// Best rational approximation of `num / den` (< 1) with denominator at most
/// `max_den`, as `(numerator, denominator)` in lowest terms.
///
/// Walks the continued-fraction convergents and stops at the last one whose
/// denominator fits. Exact fractions that fit are returned unchanged.
fn best_fraction(num: u64, den: u64, max_den: u64) -> (u64, u64) {
    // Convergent recurrences h_k = a_k h_{k-1} + h_{k-2}, same for k.
    let (mut h_prev, mut h) = (0u64, 1u64);
    let (mut k_prev, mut k) = (1u64, 0u64);
    let (mut p, mut q) = (num, den);
    while q != 0 {
        let a = p / q;
        let k_next = a * k + k_prev;
        if k_next > max_den {
            break;
        }
        let h_next = a * h + h_prev;
        (h_prev, h) = (h, h_next);
        (k_prev, k) = (k, k_next);
        (p, q) = (q, p - a * q);
    }
    if k == 0 {
        (0, 1)
    } else {
        (h, k)
    }
}
