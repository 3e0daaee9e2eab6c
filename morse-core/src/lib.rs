#![cfg_attr(not(feature = "std"), no_std)]

//! # Morse Core
//!
//! Morse transmission engine for driving a buzzer from a single binary
//! output line. Covers character lookup, PARIS timing derivation, tone
//! rendering and inter-mark spacing; line acquisition, CLI parsing and exit
//! policy belong to the surrounding process.

pub mod types;
pub mod symbols;
pub mod hal;
pub mod tone;
pub mod engine;


pub use types::*;
pub use symbols::*;
pub use engine::*;
pub use tone::*;
pub use hal::{Clock, EmbeddedHalLine, HalError, ToneLine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration of the classic beeper (18 WPM, 800 Hz tone)
pub fn default_config() -> MorseConfig {
    MorseConfig::default()
}
