//! GPIO line acquisition for the buzzer output
//!
//! The kernel releases a requested line when its handle drops, so every exit
//! path cleans up without explicit release calls, including a failed line
//! request after a successful chip open.

use std::path::{Path, PathBuf};

use linux_embedded_hal::gpio_cdev::{self, Chip, LineRequestFlags};
use linux_embedded_hal::CdevPin;
use morse_core::hal::EmbeddedHalLine;
use thiserror::Error;

/// Consumer label shown by gpioinfo while the line is claimed
const CONSUMER: &str = "morsebeep";

/// The buzzer line as seen by the transmission engine
pub type BuzzerLine = EmbeddedHalLine<CdevPin>;

/// Fatal hardware acquisition failures
#[derive(Debug, Error)]
pub enum HardwareError {
    #[error("opening GPIO chip {}", path.display())]
    OpenChip {
        path: PathBuf,
        #[source]
        source: gpio_cdev::errors::Error,
    },

    #[error("no GPIO chip with label {label:?}")]
    NoSuchLabel { label: String },

    #[error("looking up line {offset}")]
    GetLine {
        offset: u32,
        #[source]
        source: gpio_cdev::errors::Error,
    },

    #[error("requesting line {offset} as output")]
    RequestOutput {
        offset: u32,
        #[source]
        source: gpio_cdev::errors::Error,
    },
}

/// Open the chip at `path` and claim `offset` as a low-initialized output
pub fn claim_output_line(
    path: &Path,
    offset: u32,
    active_low: bool,
) -> Result<BuzzerLine, HardwareError> {
    let chip = Chip::new(path).map_err(|source| HardwareError::OpenChip {
        path: path.to_path_buf(),
        source,
    })?;
    claim_on_chip(chip, offset, active_low)
}

/// Scan /dev for a chip with the given label, then claim `offset` on it
pub fn claim_output_line_by_label(
    label: &str,
    offset: u32,
    active_low: bool,
) -> Result<BuzzerLine, HardwareError> {
    let chips = gpio_cdev::chips().map_err(|source| HardwareError::OpenChip {
        path: PathBuf::from("/dev"),
        source,
    })?;

    for chip in chips.flatten() {
        if chip.label() == label {
            return claim_on_chip(chip, offset, active_low);
        }
    }

    Err(HardwareError::NoSuchLabel {
        label: label.to_owned(),
    })
}

fn claim_on_chip(
    mut chip: Chip,
    offset: u32,
    active_low: bool,
) -> Result<BuzzerLine, HardwareError> {
    let line = chip
        .get_line(offset)
        .map_err(|source| HardwareError::GetLine { offset, source })?;

    let handle = line
        .request(LineRequestFlags::OUTPUT, 0, CONSUMER)
        .map_err(|source| HardwareError::RequestOutput { offset, source })?;

    let pin = CdevPin::new(handle)
        .map_err(|source| HardwareError::RequestOutput { offset, source })?;

    Ok(if active_low {
        EmbeddedHalLine::inverted(pin)
    } else {
        EmbeddedHalLine::new(pin)
    })
}
