//! Morse code beeper
//!
//! Reads text on standard input and keys it as Morse code on a GPIO line,
//! e.g. a passive buzzer between a Raspberry Pi's BCM 10 pin and ground.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use morse_core::engine::{CharOutcome, Transmitter};
use morse_core::hal::StdClock;
use morse_core::symbols;
use morse_core::types::{MorseConfig, MorsePattern};

mod gpio;

/// Beep Morse code on a GPIO buzzer from standard input
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    after_help = "EXAMPLE:\n  echo \"CQ\" | morsebeep -w 10\n      Send CQ at 10 words per minute"
)]
struct Args {
    /// GPIO line offset, 0-31
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(0..=31))]
    gpio: u32,

    /// Tone frequency in Hz
    #[arg(short, long, default_value_t = 800)]
    freq: u32,

    /// Words per minute
    #[arg(short, long, default_value_t = 18)]
    wpm: u32,

    /// Echo every character with its resolved pattern
    #[arg(short, long)]
    verbose: bool,

    /// GPIO character device to open
    #[arg(long, default_value = "/dev/gpiochip0", conflicts_with = "label")]
    chip: PathBuf,

    /// Find the GPIO chip by label instead of by path (e.g. pinctrl-bcm2835)
    #[arg(long)]
    label: Option<String>,

    /// Buzzer is wired active-low
    #[arg(long)]
    active_low: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    // Timing parameters are validated before any hardware is touched
    let config = MorseConfig::new(args.wpm, args.freq).context("invalid configuration")?;

    debug!("code table has {} entries", symbols::CODE_TABLE.len());

    let mut line = match &args.label {
        Some(label) => gpio::claim_output_line_by_label(label, args.gpio, args.active_low)?,
        None => gpio::claim_output_line(&args.chip, args.gpio, args.active_low)?,
    };
    let mut clock = StdClock::new();
    let mut tx = Transmitter::new(config, &mut line, &mut clock);

    info!(
        wpm = args.wpm,
        freq = args.freq,
        gpio = args.gpio,
        "sending; end of input stops transmission"
    );

    for byte in io::stdin().lock().bytes() {
        let c = char::from(byte.context("reading standard input")?);
        match tx.send_char(c).context("driving the GPIO line")? {
            CharOutcome::Keyed(pattern) => {
                debug!(
                    "{} (0x{:02X}) {}",
                    c.to_ascii_uppercase(),
                    c as u32,
                    pattern_string(pattern)
                );
            }
            CharOutcome::WordGap => debug!("(0x{:02X}) word gap", c as u32),
            CharOutcome::Skipped => debug!("(0x{:02X}) skipped", c as u32),
        }
    }

    Ok(())
}

fn pattern_string(pattern: MorsePattern) -> String {
    pattern.iter().map(|mark| mark.symbol()).collect()
}
