/// PLL output frequency for the 48 kHz sample-rate family (1024 × 48 kHz).
pub const PLL_TARGET_48K: u32 = 49_152_000;

/// PLL output frequency for the 44.1 kHz sample-rate family (1024 × 44.1 kHz).
pub const PLL_TARGET_44K1: u32 = 45_158_400;

/// Sample rates derived from 48 kHz, in Hz.
pub const FS_48K_FAMILY: [u32; 6] = [8_000, 16_000, 24_000, 32_000, 48_000, 96_000];

/// Sample rates derived from 44.1 kHz, in Hz.
pub const FS_44K1_FAMILY: [u32; 4] = [11_025, 22_050, 44_100, 88_200];

/// Master clock frequencies with a datasheet PLL setting, in Hz.
pub const SUPPORTED_MCLK: [u32; 12] = [
    8_000_000, 12_000_000, 12_288_000, 13_000_000, 14_400_000, 19_200_000,
    19_680_000, 19_800_000, 24_000_000, 24_576_000, 26_000_000, 27_000_000,
];

/// Highest PLL input frequency (after the X divider) in fractional mode, in Hz.
pub const PLL_INPUT_MAX: u32 = 13_500_000;

/// Largest value the PLL fractional denominator M may take.
pub const PLL_M_MAX: u16 = 8191;
