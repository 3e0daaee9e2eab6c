//! Transmission engine: character classification and mark sequencing

use crate::hal::{Clock, ToneLine};
use crate::symbols;
use crate::tone::render_mark;
use crate::types::{MorseConfig, MorsePattern};

/// What became of one input character
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharOutcome {
    /// Pattern rendered, followed by the standard 3-dit character gap
    Keyed(MorsePattern),
    /// Whitespace, rendered as 7 dits of silence
    WordGap,
    /// Unsupported character, discarded with zero timing cost
    Skipped,
}

/// Sequential Morse transmitter over a line and a clock
///
/// Both seams accept `&mut` implementations, so the owning process keeps the
/// line for its whole run and lends it out per transmission. Marks and
/// silences are strictly ordered in program order; every wait blocks the
/// calling thread. Each character is consumed exactly once and the only stop
/// condition is end of input.
pub struct Transmitter<L, C> {
    config: MorseConfig,
    line: L,
    clock: C,
}

impl<L, C> Transmitter<L, C>
where
    L: ToneLine,
    C: Clock,
{
    pub fn new(config: MorseConfig, line: L, clock: C) -> Self {
        Self {
            config,
            line,
            clock,
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &MorseConfig {
        &self.config
    }

    /// Access the output line
    pub fn line(&self) -> &L {
        &self.line
    }

    /// Access the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Transmit a single character
    ///
    /// Whitespace becomes an inter-word gap. Anything else is folded to
    /// uppercase and looked up; characters outside the code table are
    /// discarded without touching the line or the clock. The engine raises no
    /// errors of its own, it only propagates line failures.
    pub fn send_char(&mut self, c: char) -> Result<CharOutcome, L::Error> {
        if c.is_whitespace() {
            self.clock.pause(self.config.word_gap_micros());
            return Ok(CharOutcome::WordGap);
        }

        let c = c.to_ascii_uppercase();
        let Some(pattern) = symbols::lookup(c) else {
            return Ok(CharOutcome::Skipped);
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("keying 0x{=u32:x}, {=usize} marks", c as u32, pattern.len());

        let dit = self.config.dit_micros();
        let half_period = self.config.half_period_micros();

        for &mark in pattern {
            render_mark(
                &mut self.line,
                &mut self.clock,
                self.config.mark_micros(mark),
                half_period,
            )?;
            self.clock.pause(dit);
        }
        // One dit of silence already follows the final mark; two more
        // complete the standard 3-dit character gap
        self.clock.pause(dit * 2);

        Ok(CharOutcome::Keyed(pattern))
    }

    /// Drain a character stream, transmitting until it is exhausted
    ///
    /// End of input is the iterator running out; there is no sentinel value.
    pub fn send<I>(&mut self, chars: I) -> Result<(), L::Error>
    where
        I: IntoIterator<Item = char>,
    {
        for c in chars {
            self.send_char(c)?;
        }
        Ok(())
    }
}
