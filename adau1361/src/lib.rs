//! # adau1361
//!
//! A `no_std` control driver for the Analog Devices
//! [ADAU1361](https://www.analog.com/en/products/adau1361.html) low-power
//! stereo audio codec, generic over [`embedded_hal::i2c::I2c`].
//!
//! The driver only speaks the I2C control port. It derives the PLL setting
//! from the master clock and programs routing and gains; audio samples
//! travel over I2S, which is left to the application.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Constants | [`constants`] | PLL targets, sample-rate families, supported clocks |
//! | Registers | [`codec::registers`] | Register map and command framing |
//! | Driver | [`codec::Adau1361Lower`] | One method per register operation |
//! | Controller | [`codec::Adau1361`] | Start-up sequencing and gain cache (feature-gated) |
//! | Trait | [`control`] | `AudioControl` trait |
//!
//! ## Quick start
//!
//! ```ignore
//! use adau1361::codec::{Adau1361, Channel, Config, I2sRole};
//!
//! let config = Config {
//!     sample_rate: 48_000,
//!     master_clock: 12_288_000,
//!     role: I2sRole::Controller,
//!     ..Config::default()
//! };
//! let mut codec = Adau1361::new(i2c, delay, config);
//! codec.start()?;
//!
//! codec.set_gain(Channel::LineInput, 0.0, 0.0)?;
//! codec.set_gain(Channel::HeadphoneOutput, -12.0, -12.0)?;
//! codec.mute(Channel::HeadphoneOutput, false)?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `controller` | yes | [`codec::Adau1361`] controller (requires `DelayNs`) |
//!
//! ## Clocking
//!
//! - **PLL output:** 1024 × 48 kHz or 1024 × 44.1 kHz
//! - **Sample rates:** 8 / 16 / 24 / 32 / 48 / 96 kHz and 11.025 / 22.05 / 44.1 / 88.2 kHz
//! - **Master clocks:** see [`constants::SUPPORTED_MCLK`]

#![no_std]

pub mod constants;
pub mod control;
pub mod codec;
