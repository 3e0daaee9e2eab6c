//! End-to-end transmission timelines over virtual time

use morse_core::engine::{CharOutcome, Transmitter};
use morse_core::Clock;
use morse_core::hal::mock::{MockClock, MockLine};
use morse_core::types::Mark::{Dah, Dit};
use morse_core::types::MorseConfig;

// 20 WPM; the 800 Hz half period of 625 us divides it evenly, so virtual
// timelines come out exact
const DIT: u64 = 60_000;

fn transmitter() -> Transmitter<MockLine, MockClock> {
    let config = MorseConfig::new(20, 800).unwrap();
    Transmitter::new(config, MockLine::new(), MockClock::new())
}

#[test]
fn sos_timeline() {
    let mut tx = transmitter();

    let outcomes: Vec<_> = "SOS".chars().map(|c| tx.send_char(c).unwrap()).collect();

    assert_eq!(
        outcomes,
        vec![
            CharOutcome::Keyed(&[Dit, Dit, Dit]),
            CharOutcome::Keyed(&[Dah, Dah, Dah]),
            CharOutcome::Keyed(&[Dit, Dit, Dit]),
        ]
    );

    // S = 3 keyed + 3 gaps + 2 = 8 dits, O = 9 + 3 + 2 = 14 dits
    assert_eq!(tx.clock().now_micros(), 30 * DIT);
    assert!(tx.line().set_count() > 0);
}

#[test]
fn cq_with_trailing_space() {
    let mut tx = transmitter();

    assert_eq!(
        tx.send_char('C').unwrap(),
        CharOutcome::Keyed(&[Dah, Dit, Dah, Dit])
    );
    // C = (3+1)+(1+1)+(3+1)+(1+1) + 2 = 14 dits
    assert_eq!(tx.clock().now_micros(), 14 * DIT);

    assert_eq!(
        tx.send_char('Q').unwrap(),
        CharOutcome::Keyed(&[Dah, Dah, Dit, Dah])
    );
    // Q = (3+1)+(3+1)+(1+1)+(3+1) + 2 = 16 dits
    assert_eq!(tx.clock().now_micros(), 30 * DIT);

    let marks_so_far = tx.line().set_count();

    // The trailing space is one 7-dit word gap with no further marks
    assert_eq!(tx.send_char(' ').unwrap(), CharOutcome::WordGap);
    assert_eq!(tx.clock().now_micros(), 37 * DIT);
    assert_eq!(tx.line().set_count(), marks_so_far);
}

#[test]
fn tone_activity_per_dit() {
    let mut tx = transmitter();

    tx.send_char('E').unwrap();

    // One 60 ms dit at 800 Hz: a level change every 625 us, half of them high
    assert_eq!(tx.line().set_count(), 96);
    assert_eq!(tx.line().high_count(), 48);
}

#[test]
fn unsupported_characters_are_free() {
    let mut tx = transmitter();

    for c in ['#', '%', '@', '\u{7}', '\u{ff}', '§', '😶'] {
        assert_eq!(tx.send_char(c).unwrap(), CharOutcome::Skipped, "{c:?}");
    }

    assert_eq!(tx.clock().now_micros(), 0);
    assert_eq!(tx.line().set_count(), 0);
}

#[test]
fn mixed_case_words() {
    let mut tx = transmitter();

    tx.send("He j".chars()).unwrap();

    // H = 4+4+2 = 10 dits, E = 1+1+2 = 4, space = 7,
    // J = (1+3+3+3) + 4 gaps + 2 = 16
    assert_eq!(tx.clock().now_micros(), (10 + 4 + 7 + 16) * DIT);
}

#[test]
fn every_whitespace_character_counts() {
    let mut tx = transmitter();

    tx.send("  \n".chars()).unwrap();

    assert_eq!(tx.clock().now_micros(), 21 * DIT);
    assert_eq!(tx.line().set_count(), 0);
}

#[test]
fn empty_stream_is_silent() {
    let mut tx = transmitter();

    tx.send("".chars()).unwrap();

    assert_eq!(tx.clock().now_micros(), 0);
    assert_eq!(tx.line().set_count(), 0);
}
