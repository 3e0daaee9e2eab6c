//! Core data types for the Morse transmission engine

/// Morse code marks
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
pub enum Mark {
    /// Dit (short mark)
    Dit,
    /// Dah (long mark)
    Dah,
}

impl Mark {
    /// Returns the keyed duration of this mark in dit units
    pub const fn duration_units(&self) -> u64 {
        match self {
            Mark::Dit => 1,
            Mark::Dah => 3,
        }
    }

    /// Printable form of this mark
    pub const fn symbol(&self) -> char {
        match self {
            Mark::Dit => '.',
            Mark::Dah => '-',
        }
    }
}

/// One character's mark sequence, as defined in [`crate::symbols`]
pub type MorsePattern = &'static [Mark];

/// Invalid timing parameters, rejected before any hardware interaction
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Words per minute must be at least 1
    InvalidWpm,
    /// Tone frequency must be at least 1 Hz
    InvalidFrequency,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidWpm => write!(f, "words per minute must be at least 1"),
            ConfigError::InvalidFrequency => write!(f, "tone frequency must be at least 1 Hz"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Transmission configuration parameters
///
/// Validated at construction and fixed for the lifetime of one run;
/// recomputing timing mid-run is not supported.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MorseConfig {
    wpm: u32,
    tone_hz: u32,
}

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            wpm: 18,
            tone_hz: 800,
        }
    }
}

impl MorseConfig {
    /// Create a new configuration with validation
    pub fn new(wpm: u32, tone_hz: u32) -> Result<Self, ConfigError> {
        if wpm == 0 {
            return Err(ConfigError::InvalidWpm);
        }
        if tone_hz == 0 {
            return Err(ConfigError::InvalidFrequency);
        }

        Ok(Self { wpm, tone_hz })
    }

    /// Words per minute this configuration was built from
    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    /// Tone frequency in Hz
    pub fn tone_hz(&self) -> u32 {
        self.tone_hz
    }

    /// Base timing unit in microseconds (PARIS standard: 50 units per word)
    pub fn dit_micros(&self) -> u64 {
        1_200_000 / self.wpm as u64
    }

    /// Half of one tone wave cycle in microseconds
    pub fn half_period_micros(&self) -> u64 {
        500_000 / self.tone_hz as u64
    }

    /// Keyed duration of a single mark
    pub fn mark_micros(&self, mark: Mark) -> u64 {
        self.dit_micros() * mark.duration_units()
    }

    /// Total silence for one whitespace character
    pub fn word_gap_micros(&self) -> u64 {
        self.dit_micros() * 7
    }
}
