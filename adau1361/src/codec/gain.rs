//! dB → register code quantizers for the four analog gain stages.
//!
//! | Channel | Range | Step | Code | Byte |
//! |---------|-------|------|------|------|
//! | [`Channel::LineInput`] | −12..+6 dB | 3 dB | 1..=7 (0 = mute) | `code << 1 \| 1` |
//! | [`Channel::AuxInput`] | −12..+6 dB | 3 dB | 1..=7 (0 = mute) | `code` |
//! | [`Channel::LineOutput`] | −57..+6 dB | 1 dB | 0..=63 | `code << 2 \| unmute << 1` |
//! | [`Channel::HeadphoneOutput`] | −57..+6 dB | 1 dB | 0..=63 | `code << 2 \| unmute << 1 \| 1` |
//!
//! Out-of-range requests saturate; quantization always rounds down to the
//! next lower step.

use super::registers as reg;

/// Lowest input-mixer gain in dB (code 1).
pub const INPUT_MIN_DB: f32 = -12.0;
/// Input-mixer gain step in dB.
pub const INPUT_STEP_DB: f32 = 3.0;
/// Lowest output volume in dB (code 0).
pub const OUTPUT_MIN_DB: f32 = -57.0;

const INPUT_CODE_MAX: f32 = 7.0;
const OUTPUT_CODE_MAX: f32 = 63.0;

/// An analog gain stage with a left/right register pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Single-ended line input into the record mixers (R4/R6).
    LineInput,
    /// Aux input into the record mixers (R5/R7).
    AuxInput,
    /// Line output volume (R31/R32).
    LineOutput,
    /// Headphone output volume (R29/R30).
    HeadphoneOutput,
}

impl Channel {
    /// Every channel, inputs first.
    pub const ALL: [Channel; 4] = [
        Channel::LineInput,
        Channel::AuxInput,
        Channel::LineOutput,
        Channel::HeadphoneOutput,
    ];

    /// `(left, right)` register addresses.
    pub const fn registers(self) -> (u16, u16) {
        match self {
            Channel::LineInput => (reg::REC_MIXER_LEFT_0, reg::REC_MIXER_RIGHT_0),
            Channel::AuxInput => (reg::REC_MIXER_LEFT_1, reg::REC_MIXER_RIGHT_1),
            Channel::LineOutput => (reg::PLAY_LINE_LEFT_VOL, reg::PLAY_LINE_RIGHT_VOL),
            Channel::HeadphoneOutput => (reg::PLAY_HP_LEFT_VOL, reg::PLAY_HP_RIGHT_VOL),
        }
    }

    /// Gain code for one side.
    ///
    /// Input stages report code 0 when muted; output stages keep the
    /// volume code and carry mute in separate flag bits.
    pub fn code(self, db: f32, mute: bool) -> u8 {
        match self {
            Channel::LineInput | Channel::AuxInput => {
                if mute {
                    0
                } else {
                    input_code(db)
                }
            }
            Channel::LineOutput | Channel::HeadphoneOutput => output_code(db),
        }
    }

    /// Register byte for one side.
    pub fn register_byte(self, db: f32, mute: bool) -> u8 {
        let code = self.code(db, mute);
        match self {
            // bit 0: MX1EN / MX2EN stays on so aux still reaches the mixer
            Channel::LineInput => (code << 1) | 1,
            Channel::AuxInput => code,
            // bit 1: unmute, bit 0: LOMODE = line
            Channel::LineOutput => (code << 2) | if mute { 0b00 } else { 0b10 },
            // bit 1: unmute, bit 0: HPEN = headphone
            Channel::HeadphoneOutput => (code << 2) | if mute { 0b01 } else { 0b11 },
        }
    }

    /// Both register writes for a left/right request, left first.
    pub fn commands(self, left_db: f32, right_db: f32, mute: bool) -> [[u8; 3]; 2] {
        let (left, right) = self.registers();
        [
            reg::command(left, self.register_byte(left_db, mute)),
            reg::command(right, self.register_byte(right_db, mute)),
        ]
    }
}

/// Input-mixer code: `clamp(floor((db + 12) / 3) + 1, 1, 7)`.
///
/// NaN maps to the lowest code.
pub fn input_code(db: f32) -> u8 {
    let steps = libm::floorf((db - INPUT_MIN_DB) / INPUT_STEP_DB) + 1.0;
    // f32::max/min discard NaN
    steps.max(1.0).min(INPUT_CODE_MAX) as u8
}

/// Output volume code: `clamp(floor(db + 57), 0, 63)`.
///
/// NaN maps to the lowest code.
pub fn output_code(db: f32) -> u8 {
    let steps = libm::floorf(db - OUTPUT_MIN_DB);
    steps.max(0.0).min(OUTPUT_CODE_MAX) as u8
}
