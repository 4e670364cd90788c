//! ADAU1361 register addresses and bitfield definitions.
//!
//! Taken from the ADAU1361 datasheet register map. Register addresses are
//! 16-bit and sent big-endian; every control register except the PLL block
//! (R1) holds a single byte.

// ── I2C addresses ──────────────────────────────────────────────────────────

/// 7-bit I2C address with ADDR1 = 0, ADDR0 = 0.
pub const I2C_ADDR_00: u8 = 0x38;

/// 7-bit I2C address with ADDR1 = 0, ADDR0 = 1.
pub const I2C_ADDR_01: u8 = 0x39;

/// 7-bit I2C address with ADDR1 = 1, ADDR0 = 0.
pub const I2C_ADDR_10: u8 = 0x3A;

/// 7-bit I2C address with ADDR1 = 1, ADDR0 = 1.
pub const I2C_ADDR_11: u8 = 0x3B;

// ── Clocking ───────────────────────────────────────────────────────────────

/// R0: Clock control.
/// - Bit  3  : CLKSRC (0=MCLK pin, 1=PLL)
/// - Bits 2:1: INFREQ (0=256×fs, 1=512×fs, 2=768×fs, 3=1024×fs)
/// - Bit  0  : COREN (core clock enable)
pub const CLOCK_CONTROL: u16 = 0x4000;

/// R1: PLL control (6 bytes, must be written and read in one transfer).
/// - Bytes 0:1: M (denominator, big-endian)
/// - Bytes 2:3: N (numerator, big-endian)
/// - Byte  4  : bits 6:3 R (integer part, 0 means 8), bits 2:1 X−1,
///   bit 0 TYPE (1=fractional)
/// - Byte  5  : bit 1 LOCK (read-only), bit 0 PLLEN
pub const PLL_CONTROL: u16 = 0x4002;

/// Length of the R1 payload.
pub const PLL_CONTROL_LEN: usize = 6;

/// Index of the lock/enable byte within the R1 payload.
pub const PLL_STATUS_BYTE: usize = 5;

/// LOCK bit within the R1 status byte.
pub const PLL_LOCK: u8 = 1 << 1;

/// PLLEN bit within the R1 status byte.
pub const PLL_ENABLE: u8 = 1 << 0;

// ── Record path ────────────────────────────────────────────────────────────

/// R2: Digital microphone/jack detection control.
pub const DIGITAL_MIC: u16 = 0x4008;

/// R3: Record power management.
pub const REC_POWER_MGMT: u16 = 0x4009;

/// R4: Record mixer left 0.
/// - Bits 3:1: LINNG, single-ended line input gain (0=mute, 1=−12 dB .. 7=+6 dB)
/// - Bit  0  : MX1EN (mixer enable)
pub const REC_MIXER_LEFT_0: u16 = 0x400A;

/// R5: Record mixer left 1.
/// - Bits 2:0: MX1AUXG, left aux gain (0=mute, 1=−12 dB .. 7=+6 dB)
pub const REC_MIXER_LEFT_1: u16 = 0x400B;

/// R6: Record mixer right 0 (layout as R4).
pub const REC_MIXER_RIGHT_0: u16 = 0x400C;

/// R7: Record mixer right 1 (layout as R5).
pub const REC_MIXER_RIGHT_1: u16 = 0x400D;

/// R8: Left differential input volume.
pub const LEFT_DIFF_INPUT_VOL: u16 = 0x400E;

/// R9: Right differential input volume.
pub const RIGHT_DIFF_INPUT_VOL: u16 = 0x400F;

/// R10: Record microphone bias.
pub const REC_MIC_BIAS: u16 = 0x4010;

/// R11–R14: ALC control 0..3.
pub const ALC_0: u16 = 0x4011;
pub const ALC_1: u16 = 0x4012;
pub const ALC_2: u16 = 0x4013;
pub const ALC_3: u16 = 0x4014;

// ── Serial port and converters ─────────────────────────────────────────────

/// R15: Serial port 0.
/// - Bit 0: MS (0=target, 1=controller)
pub const SERIAL_PORT_0: u16 = 0x4015;

/// Master-mode bit within R15.
pub const SERIAL_PORT_MASTER: u8 = 1 << 0;

/// R16: Serial port 1.
pub const SERIAL_PORT_1: u16 = 0x4016;

/// R17: Converter control 0.
/// - Bits 2:0: CONVSR (converter sampling rate, see `ConverterRate`)
pub const CONVERTER_0: u16 = 0x4017;

/// R18: Converter control 1.
pub const CONVERTER_1: u16 = 0x4018;

/// R19: ADC control.
/// - Bit  5  : ADCPOL
/// - Bit  4  : HPF
/// - Bits 1:0: ADCEN (right, left)
pub const ADC_CONTROL: u16 = 0x4019;

/// R20/R21: Left/right ADC digital volume (0.375 dB attenuation steps).
pub const LEFT_DIGITAL_VOL: u16 = 0x401A;
pub const RIGHT_DIGITAL_VOL: u16 = 0x401B;

// ── Playback path ──────────────────────────────────────────────────────────

/// R22: Playback mixer left 0.
/// - Bit 5: MX3LM (left DAC into mixer 3)
/// - Bit 0: MX3EN
pub const PLAY_MIXER_LEFT_0: u16 = 0x401C;

/// R23: Playback mixer left 1.
pub const PLAY_MIXER_LEFT_1: u16 = 0x401D;

/// R24: Playback mixer right 0.
/// - Bit 6: MX4RM (right DAC into mixer 4)
/// - Bit 0: MX4EN
pub const PLAY_MIXER_RIGHT_0: u16 = 0x401E;

/// R25: Playback mixer right 1.
pub const PLAY_MIXER_RIGHT_1: u16 = 0x401F;

/// R26: Playback L/R mixer left (line output left).
pub const PLAY_LR_MIXER_LEFT: u16 = 0x4020;

/// R27: Playback L/R mixer right (line output right).
pub const PLAY_LR_MIXER_RIGHT: u16 = 0x4021;

/// R28: Playback L/R mixer mono.
pub const PLAY_LR_MIXER_MONO: u16 = 0x4022;

/// R29: Playback headphone left volume.
/// - Bits 7:2: LHPVOL (0=−57 dB .. 63=+6 dB)
/// - Bit  1  : LHPM (0=mute, 1=unmute)
/// - Bit  0  : HPEN (1=headphone output mode)
pub const PLAY_HP_LEFT_VOL: u16 = 0x4023;

/// R30: Playback headphone right volume (layout as R29).
pub const PLAY_HP_RIGHT_VOL: u16 = 0x4024;

/// R31: Playback line output left volume.
/// - Bits 7:2: LOUTVOL (0=−57 dB .. 63=+6 dB)
/// - Bit  1  : LOUTM (0=mute, 1=unmute)
/// - Bit  0  : LOMODE (0=line output)
pub const PLAY_LINE_LEFT_VOL: u16 = 0x4025;

/// R32: Playback line output right volume (layout as R31).
pub const PLAY_LINE_RIGHT_VOL: u16 = 0x4026;

/// R33: Playback mono output.
pub const PLAY_MONO_OUTPUT: u16 = 0x4027;

/// R34: Pop/click suppression.
pub const POP_CLICK: u16 = 0x4028;

/// R35: Playback power management.
/// - Bits 1:0: PREN/PLEN (right, left playback enable)
pub const PLAY_POWER_MGMT: u16 = 0x4029;

/// R36: DAC control 0.
/// - Bits 1:0: DACEN (right, left)
pub const DAC_CONTROL_0: u16 = 0x402A;

/// R37/R38: DAC control 1/2 (left/right digital volume).
pub const DAC_CONTROL_1: u16 = 0x402B;
pub const DAC_CONTROL_2: u16 = 0x402C;

// ── Pads and misc ──────────────────────────────────────────────────────────

/// R39: Serial port pad control.
pub const SERIAL_PORT_PAD: u16 = 0x402D;

/// R40/R41: Control port pad control 0/1.
pub const CONTROL_PORT_PAD_0: u16 = 0x402F;
pub const CONTROL_PORT_PAD_1: u16 = 0x4030;

/// R42: Jack detect pin.
pub const JACK_DETECT_PIN: u16 = 0x4031;

/// R67: Dejitter control.
pub const DEJITTER: u16 = 0x4036;

// ── Routing and clock enables ──────────────────────────────────────────────

/// R58: Serial input route control.
pub const SERIAL_INPUT_ROUTE: u16 = 0x40F2;

/// R59: Serial output route control.
pub const SERIAL_OUTPUT_ROUTE: u16 = 0x40F3;

/// R60: Serial data/GPIO pin configuration.
pub const SERIAL_DATA_GPIO: u16 = 0x40F4;

/// R61: DSP enable.
pub const DSP_ENABLE: u16 = 0x40F5;

/// R62: DSP run.
pub const DSP_RUN: u16 = 0x40F6;

/// R63: DSP slew modes.
pub const DSP_SLEW_MODES: u16 = 0x40F7;

/// R57: DSP sampling rate setting.
pub const DSP_SAMPLING_RATE: u16 = 0x40EB;

/// R64: Serial port sampling rate.
/// - Bits 2:0: SPSR (same encoding as CONVSR)
pub const SERIAL_PORT_SAMPLING_RATE: u16 = 0x40F8;

/// R65: Clock enable 0.
pub const CLOCK_ENABLE_0: u16 = 0x40F9;

/// R66: Clock enable 1.
pub const CLOCK_ENABLE_1: u16 = 0x40FA;

/// Split a register address into its big-endian wire bytes.
#[inline]
pub const fn address_bytes(register: u16) -> [u8; 2] {
    [(register >> 8) as u8, register as u8]
}

/// Build a single-byte register write `[addr_hi, addr_lo, value]`.
#[inline]
pub const fn command(register: u16, value: u8) -> [u8; 3] {
    [(register >> 8) as u8, register as u8, value]
}
