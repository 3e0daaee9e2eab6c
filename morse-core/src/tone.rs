//! Tone rendering over a binary output line

use crate::hal::{Clock, ToneLine};

/// Drive `line` as a square wave for `duration_micros`
///
/// Alternates the line level starting from low, holding each level for one
/// `half_period_micros` pause, then re-reading the clock. Total duration is
/// bounded by the monotonic clock rather than by counting toggles, so sleep
/// slack cannot accumulate into audible drift on long marks.
///
/// The resting level on exit is unspecified. When the half period exceeds the
/// remaining duration the line may be set only once (or, for a zero
/// duration, not at all); at audio rates such a mark is indistinguishable
/// from silence.
pub fn render_mark<L, C>(
    line: &mut L,
    clock: &mut C,
    duration_micros: u64,
    half_period_micros: u64,
) -> Result<(), L::Error>
where
    L: ToneLine,
    C: Clock,
{
    let start = clock.now_micros();
    let mut level = false;

    while clock.now_micros().saturating_sub(start) < duration_micros {
        line.set_state(level)?;
        level = !level;
        clock.pause(half_period_micros);
    }

    Ok(())
}
