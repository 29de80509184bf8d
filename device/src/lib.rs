#![macro_use]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(async_fn_in_trait)]
//! Board support for the Adafruit CLUE, built on [embassy](https://github.com/embassy-rs/embassy).
//!
//! The crate is split the same way for every peripheral:
//!
//! * [`traits`] describe what a device can do (play a sample, record a buffer, read a sensor).
//! * [`drivers`] implement behavior on top of those traits: the tone player, the
//!   sound level analyzer, button latching, LEDs and the sensor text layout.
//! * [`bsp`] binds the traits to the nRF52840 peripherals of the board.
//! * [`clue`] groups the on-board devices into small, readable wrappers.
//!
//! Drivers never touch hardware directly, so everything except [`bsp`] runs
//! (and is tested) on the host with the doubles in `testutil`.
//!
//! # Example
//!
//! ```ignore
//! use clue_device::bsp::{boards::nrf52::adafruit_clue::*, Board};
//! use clue_device::drivers::audio::{SoundLevel, TonePlayer};
//! use embassy_time::{Delay, Duration};
//!
//! let board = AdafruitClue::init(Default::default());
//! let mut tone = TonePlayer::new(board.speaker);
//! let mut level = SoundLevel::new(board.microphone);
//!
//! if level.is_loud_default().await? {
//!     tone.play_for(&mut Delay, 440, Duration::from_millis(500)).await?;
//! }
//! ```

pub(crate) mod fmt;

pub mod traits;

pub mod drivers;

pub mod domain;

pub mod bsp;
pub use bsp::Board;

pub mod clue;

pub mod shared;
pub use shared::{Handle, Shared};

#[cfg(feature = "std")]
pub mod testutil;
