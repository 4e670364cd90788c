//! High-level ADAU1361 controller.
//!
//! Wraps [`Adau1361Lower`] with the start-up ordering the codec requires
//! and a per-channel gain/mute cache.
//!
//! # Example
//!
//! ```ignore
//! let config = Config {
//!     sample_rate: 48_000,
//!     master_clock: 12_288_000,
//!     role: I2sRole::Controller,
//!     ..Config::default()
//! };
//! let mut codec = Adau1361::new(i2c, delay, config);
//! codec.start()?;
//! codec.set_gain(Channel::HeadphoneOutput, -6.0, -6.0)?;
//! codec.mute(Channel::HeadphoneOutput, false)?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{info, warn};

use super::clock::SampleRateFamily;
use super::error::{ConfigError, Error};
use super::gain::Channel;
use super::lower::{Adau1361Lower, I2sRole};
use super::pll::PllParameters;
use crate::control::AudioControl;

/// Static codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Master clock on the MCLK pin in Hz.
    pub master_clock: u32,
    /// Serial port clocking role.
    pub role: I2sRole,
    /// Maximum PLL lock polls; `None` waits forever.
    pub pll_lock_polls: Option<u32>,
    /// Delay between lock polls in microseconds.
    pub pll_poll_interval_us: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            master_clock: 12_288_000,
            role: I2sRole::Target,
            pll_lock_polls: Some(1000),
            pll_poll_interval_us: 100,
        }
    }
}

impl Config {
    /// Check sample rate and master clock without touching the bus.
    pub fn validate(&self) -> Result<PllParameters, ConfigError> {
        let family = SampleRateFamily::from_fs(self.sample_rate)?;
        PllParameters::for_clock(family, self.master_clock)
    }
}

/// Cached request for one channel pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainState {
    pub left_db: f32,
    pub right_db: f32,
    pub mute: bool,
}

const fn slot(channel: Channel) -> usize {
    match channel {
        Channel::LineInput => 0,
        Channel::AuxInput => 1,
        Channel::LineOutput => 2,
        Channel::HeadphoneOutput => 3,
    }
}

/// ADAU1361 controller.
///
/// Gain and mute requests made before [`start`](Self::start) are cached and
/// written once the core clock runs; the control registers do not accept
/// writes while it is stopped.
pub struct Adau1361<I2C, D> {
    lower: Adau1361Lower<I2C>,
    delay: D,
    config: Config,
    gains: [GainState; 4],
    started: bool,
}

impl<I2C, D> Adau1361<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a controller at the default address (0x38).
    pub fn new(i2c: I2C, delay: D, config: Config) -> Self {
        Self::new_with_address(i2c, delay, Adau1361Lower::<I2C>::DEFAULT_ADDRESS, config)
    }

    /// Create a controller at a specific 7-bit address.
    pub fn new_with_address(i2c: I2C, delay: D, address: u8, config: Config) -> Self {
        let input = GainState { left_db: 0.0, right_db: 0.0, mute: false };
        let output = GainState { mute: true, ..input };
        Self {
            lower: Adau1361Lower::new(i2c, address),
            delay,
            config,
            gains: [input, input, output, output],
            started: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether `start` has completed and the core clock is running.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Cached gain request for `channel`.
    pub fn gain(&self, channel: Channel) -> GainState {
        self.gains[slot(channel)]
    }

    /// Direct register access.
    pub fn lower(&mut self) -> &mut Adau1361Lower<I2C> {
        &mut self.lower
    }

    /// Bring the codec up.
    ///
    /// Probes the device, restarts its clocking from the PLL, clears the
    /// configuration registers, sets converter rates and routing, then
    /// writes every cached gain.
    pub fn start(&mut self) -> Result<(), Error<I2C::Error>> {
        self.config.validate()?;
        self.started = false;

        if !self.lower.is_device_existing() {
            warn!("adau1361 not found at {:#04x}", self.lower.address());
            return Err(Error::DeviceNotFound);
        }

        let Config { sample_rate, master_clock, role, .. } = self.config;
        self.lower.initialize_core().map_err(Error::I2c)?;
        self.lower.disable_pll().map_err(Error::I2c)?;
        self.lower
            .configure_pll(sample_rate, master_clock)
            .map_err(Error::I2c)?;
        self.wait_pll_lock()?;
        self.lower.enable_core().map_err(Error::I2c)?;
        self.lower.initialize_registers().map_err(Error::I2c)?;
        self.lower.configure_src(sample_rate).map_err(Error::I2c)?;
        self.lower.configure_signal_path(role).map_err(Error::I2c)?;

        self.started = true;
        for channel in Channel::ALL {
            self.apply(channel)?;
        }
        info!(
            "adau1361 running: fs {} Hz, mclock {} Hz, {:?}",
            sample_rate, master_clock, role
        );
        Ok(())
    }

    /// Mute every channel and stop the core clock.
    pub fn stop(&mut self) -> Result<(), Error<I2C::Error>> {
        if self.started {
            for channel in Channel::ALL {
                let GainState { left_db, right_db, .. } = self.gains[slot(channel)];
                self.lower
                    .set_gain(channel, left_db, right_db, true)
                    .map_err(Error::I2c)?;
            }
        }
        self.lower.initialize_core().map_err(Error::I2c)?;
        self.started = false;
        Ok(())
    }

    /// Set the left/right gain of `channel` in dB. The mute state is kept.
    pub fn set_gain(
        &mut self,
        channel: Channel,
        left_db: f32,
        right_db: f32,
    ) -> Result<(), Error<I2C::Error>> {
        let state = &mut self.gains[slot(channel)];
        state.left_db = left_db;
        state.right_db = right_db;
        self.apply(channel)
    }

    /// Mute or unmute `channel`, re-sending its cached gain.
    pub fn mute(&mut self, channel: Channel, mute: bool) -> Result<(), Error<I2C::Error>> {
        self.gains[slot(channel)].mute = mute;
        self.apply(channel)
    }

    /// Give back the bus and the delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.lower.release(), self.delay)
    }

    fn apply(&mut self, channel: Channel) -> Result<(), Error<I2C::Error>> {
        if !self.started {
            return Ok(());
        }
        let GainState { left_db, right_db, mute } = self.gains[slot(channel)];
        self.lower
            .set_gain(channel, left_db, right_db, mute)
            .map(|_| ())
            .map_err(Error::I2c)
    }

    fn wait_pll_lock(&mut self) -> Result<(), Error<I2C::Error>> {
        let interval = self.config.pll_poll_interval_us;
        match self.config.pll_lock_polls {
            None => {
                while !self.lower.is_pll_locked().map_err(Error::I2c)? {
                    self.delay.delay_us(interval);
                }
                Ok(())
            }
            Some(polls) => {
                for _ in 0..polls {
                    if self.lower.is_pll_locked().map_err(Error::I2c)? {
                        return Ok(());
                    }
                    self.delay.delay_us(interval);
                }
                warn!("adau1361 PLL not locked after {} polls", polls);
                Err(Error::PllLockTimeout)
            }
        }
    }
}

impl<I2C, D> AudioControl for Adau1361<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = Error<I2C::Error>;

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.start()
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.stop()
    }

    fn set_gain(&mut self, channel: Channel, left_db: f32, right_db: f32) -> Result<(), Self::Error> {
        Adau1361::set_gain(self, channel, left_db, right_db)
    }

    fn mute(&mut self, channel: Channel, mute: bool) -> Result<(), Self::Error> {
        Adau1361::mute(self, channel, mute)
    }
}
