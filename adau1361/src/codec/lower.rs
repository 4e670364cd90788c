//! Register-level ADAU1361 control.
//!
//! [`Adau1361Lower`] turns configuration requests into register writes and
//! nothing more: it holds no state besides the bus and the device address.
//! Start-up ordering and gain caching live in the
//! [`Adau1361`](super::Adau1361) controller.
//!
//! # Example
//!
//! ```ignore
//! let mut codec = Adau1361Lower::new(i2c, Adau1361Lower::<_>::DEFAULT_ADDRESS);
//! codec.initialize_core()?;
//! codec.disable_pll()?;
//! codec.configure_pll(48_000, 12_288_000)?;
//! codec.wait_pll_lock()?;
//! codec.enable_core()?;
//! ```

use embedded_hal::i2c::I2c;
use log::{debug, trace, warn};

use super::clock::{ConverterRate, SampleRateFamily};
use super::error::ConfigError;
use super::gain::Channel;
use super::pll::PllParameters;
use super::registers as reg;

/// Which side drives the I2S bit and frame clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum I2sRole {
    /// The host drives BCLK/LRCLK.
    #[default]
    Target,
    /// The codec drives BCLK/LRCLK.
    Controller,
}

/// Zero-length write to `address`; `true` if the address phase was acknowledged.
pub fn probe<I2C: I2c>(i2c: &mut I2C, address: u8) -> bool {
    match i2c.write(address, &[]) {
        Ok(()) => true,
        Err(e) => {
            warn!("no acknowledge from {:#04x}: {:?}", address, e);
            false
        }
    }
}

/// Configuration registers cleared by
/// [`initialize_registers`](Adau1361Lower::initialize_registers):
/// R2..R42, R67 and R58..R66.
const CLEARED_REGISTERS: [u16; 51] = [
    reg::DIGITAL_MIC,
    reg::REC_POWER_MGMT,
    reg::REC_MIXER_LEFT_0,
    reg::REC_MIXER_LEFT_1,
    reg::REC_MIXER_RIGHT_0,
    reg::REC_MIXER_RIGHT_1,
    reg::LEFT_DIFF_INPUT_VOL,
    reg::RIGHT_DIFF_INPUT_VOL,
    reg::REC_MIC_BIAS,
    reg::ALC_0,
    reg::ALC_1,
    reg::ALC_2,
    reg::ALC_3,
    reg::SERIAL_PORT_0,
    reg::SERIAL_PORT_1,
    reg::CONVERTER_0,
    reg::CONVERTER_1,
    reg::ADC_CONTROL,
    reg::LEFT_DIGITAL_VOL,
    reg::RIGHT_DIGITAL_VOL,
    reg::PLAY_MIXER_LEFT_0,
    reg::PLAY_MIXER_LEFT_1,
    reg::PLAY_MIXER_RIGHT_0,
    reg::PLAY_MIXER_RIGHT_1,
    reg::PLAY_LR_MIXER_LEFT,
    reg::PLAY_LR_MIXER_RIGHT,
    reg::PLAY_LR_MIXER_MONO,
    reg::PLAY_HP_LEFT_VOL,
    reg::PLAY_HP_RIGHT_VOL,
    reg::PLAY_LINE_LEFT_VOL,
    reg::PLAY_LINE_RIGHT_VOL,
    reg::PLAY_MONO_OUTPUT,
    reg::POP_CLICK,
    reg::PLAY_POWER_MGMT,
    reg::DAC_CONTROL_0,
    reg::DAC_CONTROL_1,
    reg::DAC_CONTROL_2,
    reg::SERIAL_PORT_PAD,
    reg::CONTROL_PORT_PAD_0,
    reg::CONTROL_PORT_PAD_1,
    reg::JACK_DETECT_PIN,
    reg::DEJITTER,
    reg::SERIAL_INPUT_ROUTE,
    reg::SERIAL_OUTPUT_ROUTE,
    reg::SERIAL_DATA_GPIO,
    reg::DSP_ENABLE,
    reg::DSP_RUN,
    reg::DSP_SLEW_MODES,
    reg::SERIAL_PORT_SAMPLING_RATE,
    reg::CLOCK_ENABLE_0,
    reg::CLOCK_ENABLE_1,
];

/// Number of writes issued by `configure_signal_path`.
pub const SIGNAL_PATH_LEN: usize = 12;

/// Fixed routing: line/aux → record mixers → ADCs → serial out, and
/// serial in → DACs → playback mixers → line/headphone outputs.
///
/// Gains and mutes are not part of the table.
fn signal_path(role: I2sRole) -> [[u8; 3]; SIGNAL_PATH_LEN] {
    let master = match role {
        I2sRole::Target => 0,
        I2sRole::Controller => reg::SERIAL_PORT_MASTER,
    };
    [
        reg::command(reg::SERIAL_PORT_0, master),
        // HPF on, both ADCs
        reg::command(reg::ADC_CONTROL, 0x13),
        // left DAC → mixer 3, right DAC → mixer 4
        reg::command(reg::PLAY_MIXER_LEFT_0, 0x21),
        reg::command(reg::PLAY_MIXER_RIGHT_0, 0x41),
        // mixer 3 → left line out, mixer 4 → right line out, 0 dB
        reg::command(reg::PLAY_LR_MIXER_LEFT, 0x03),
        reg::command(reg::PLAY_LR_MIXER_RIGHT, 0x09),
        reg::command(reg::PLAY_POWER_MGMT, 0x03),
        reg::command(reg::DAC_CONTROL_0, 0x03),
        // serial slots 0/1 ↔ converters L/R
        reg::command(reg::SERIAL_INPUT_ROUTE, 0x01),
        reg::command(reg::SERIAL_OUTPUT_ROUTE, 0x01),
        reg::command(reg::CLOCK_ENABLE_0, 0x7F),
        reg::command(reg::CLOCK_ENABLE_1, 0x03),
    ]
}

fn or_panic<T>(result: Result<T, ConfigError>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

/// Low-level ADAU1361 driver.
///
/// Every operation returns the bus error unchanged. Invalid sample rates
/// and master clocks are static configuration mistakes and panic before
/// touching the bus.
pub struct Adau1361Lower<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Adau1361Lower<I2C>
where
    I2C: I2c,
{
    /// I2C address with both ADDR pins low.
    pub const DEFAULT_ADDRESS: u8 = reg::I2C_ADDR_00;

    /// Bind a transport and a 7-bit device address.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    // ── Command sequencing ─────────────────────────────────────────────

    /// Write one command (`[addr_hi, addr_lo, data...]`) ending with a Stop.
    ///
    /// Returns the number of bytes transferred.
    pub fn send_command(&mut self, command: &[u8]) -> Result<usize, I2C::Error> {
        trace!("adau1361 @{:#04x} write {:02x?}", self.address, command);
        self.i2c.write(self.address, command)?;
        Ok(command.len())
    }

    /// Write each row as its own transaction, in order.
    ///
    /// A failed row does not stop the rows after it. Returns the total
    /// bytes transferred, or the first error seen.
    pub fn send_command_table<const N: usize>(
        &mut self,
        table: &[[u8; N]],
    ) -> Result<usize, I2C::Error> {
        let mut sent = 0;
        let mut first_error = None;
        for row in table {
            match self.send_command(row) {
                Ok(n) => sent += n,
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(sent),
        }
    }

    /// Whether the codec acknowledges its address.
    pub fn is_device_existing(&mut self) -> bool {
        probe(&mut self.i2c, self.address)
    }

    // ── Clocking ───────────────────────────────────────────────────────

    /// Stop the core clock and select MCLK as its source (R0 = 0x00).
    ///
    /// Must come first, before anything else is configured.
    pub fn initialize_core(&mut self) -> Result<usize, I2C::Error> {
        self.send_command(&reg::command(reg::CLOCK_CONTROL, 0x00))
    }

    /// Power the PLL down.
    pub fn disable_pll(&mut self) -> Result<usize, I2C::Error> {
        self.send_command(&PllParameters::POWER_DOWN.command())
    }

    /// Program and enable the PLL for `fs` Hz from an `mclock` Hz master clock.
    ///
    /// # Panics
    ///
    /// With `"Bad Fs"` if `fs` is in neither sample-rate family, or
    /// `"Wrong Master Clock with Fs ... Series"` if `mclock` is not supported.
    /// Nothing is written in either case.
    pub fn configure_pll(&mut self, fs: u32, mclock: u32) -> Result<usize, I2C::Error> {
        let family = or_panic(SampleRateFamily::from_fs(fs));
        let pll = or_panic(PllParameters::for_clock(family, mclock));
        debug!(
            "adau1361 PLL: fs {} Hz, mclock {} Hz -> x {} r {} n {} m {} {}",
            fs,
            mclock,
            pll.x,
            pll.r,
            pll.n,
            pll.m,
            if pll.fractional { "fractional" } else { "integer" }
        );
        self.send_command(&pll.command())
    }

    /// Read the 6-byte R1 block (register address write, Restart, read).
    pub fn read_pll_status(&mut self) -> Result<[u8; reg::PLL_CONTROL_LEN], I2C::Error> {
        let mut status = [0u8; reg::PLL_CONTROL_LEN];
        self.i2c.write_read(
            self.address,
            &reg::address_bytes(reg::PLL_CONTROL),
            &mut status,
        )?;
        Ok(status)
    }

    /// One poll of the PLL LOCK bit.
    pub fn is_pll_locked(&mut self) -> Result<bool, I2C::Error> {
        let status = self.read_pll_status()?;
        Ok(status[reg::PLL_STATUS_BYTE] & reg::PLL_LOCK != 0)
    }

    /// Poll until the PLL reports lock.
    ///
    /// Never returns if the PLL never locks; see
    /// [`try_wait_pll_lock`](Self::try_wait_pll_lock) for a bounded wait.
    pub fn wait_pll_lock(&mut self) -> Result<(), I2C::Error> {
        while !self.is_pll_locked()? {}
        Ok(())
    }

    /// Poll at most `max_polls` times. Returns whether lock was seen.
    pub fn try_wait_pll_lock(&mut self, max_polls: u32) -> Result<bool, I2C::Error> {
        for _ in 0..max_polls {
            if self.is_pll_locked()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Run the core from the PLL at 1024 × fs (R0 = 0x0F).
    pub fn enable_core(&mut self) -> Result<usize, I2C::Error> {
        self.send_command(&reg::command(reg::CLOCK_CONTROL, 0x0F))
    }

    // ── Register setup ─────────────────────────────────────────────────

    /// Clear R2..R42, R67 and R58..R66.
    pub fn initialize_registers(&mut self) -> Result<usize, I2C::Error> {
        let mut table = [[0u8; 3]; CLEARED_REGISTERS.len()];
        for (row, &register) in table.iter_mut().zip(CLEARED_REGISTERS.iter()) {
            *row = reg::command(register, 0x00);
        }
        self.send_command_table(&table)
    }

    /// Select converter (R17) and serial port (R64) rates for `fs`.
    ///
    /// # Panics
    ///
    /// With `"Bad Fs"` if `fs` is in neither sample-rate family.
    pub fn configure_src(&mut self, fs: u32) -> Result<usize, I2C::Error> {
        let rate = or_panic(ConverterRate::from_fs(fs));
        debug!("adau1361 SRC: fs {} Hz -> {:?}", fs, rate);
        self.send_command_table(&[
            reg::command(reg::CONVERTER_0, rate.bits()),
            reg::command(reg::SERIAL_PORT_SAMPLING_RATE, rate.bits()),
        ])
    }

    /// Route analog inputs to the serial output and the serial input to
    /// the analog outputs, with the serial port in `role`.
    pub fn configure_signal_path(&mut self, role: I2sRole) -> Result<usize, I2C::Error> {
        self.send_command_table(&signal_path(role))
    }

    // ── Gains ──────────────────────────────────────────────────────────

    /// Write the left/right gain registers of `channel`, left first.
    pub fn set_gain(
        &mut self,
        channel: Channel,
        left_db: f32,
        right_db: f32,
        mute: bool,
    ) -> Result<usize, I2C::Error> {
        self.send_command_table(&channel.commands(left_db, right_db, mute))
    }

    /// Line input mixer gain, −12..+6 dB in 3 dB steps.
    pub fn set_line_input_gain(
        &mut self,
        left_db: f32,
        right_db: f32,
        mute: bool,
    ) -> Result<usize, I2C::Error> {
        self.set_gain(Channel::LineInput, left_db, right_db, mute)
    }

    /// Aux input mixer gain, −12..+6 dB in 3 dB steps.
    pub fn set_aux_input_gain(
        &mut self,
        left_db: f32,
        right_db: f32,
        mute: bool,
    ) -> Result<usize, I2C::Error> {
        self.set_gain(Channel::AuxInput, left_db, right_db, mute)
    }

    /// Line output volume, −57..+6 dB in 1 dB steps.
    pub fn set_line_output_gain(
        &mut self,
        left_db: f32,
        right_db: f32,
        mute: bool,
    ) -> Result<usize, I2C::Error> {
        self.set_gain(Channel::LineOutput, left_db, right_db, mute)
    }

    /// Headphone output volume, −57..+6 dB in 1 dB steps.
    pub fn set_hp_output_gain(
        &mut self,
        left_db: f32,
        right_db: f32,
        mute: bool,
    ) -> Result<usize, I2C::Error> {
        self.set_gain(Channel::HeadphoneOutput, left_db, right_db, mute)
    }

    /// Give back the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
