//! Hardware and clock abstraction for the transmission engine
//!
//! The engine borrows a [`ToneLine`] and a [`Clock`]; acquiring and releasing
//! the underlying GPIO line is the owning process's job.

use embedded_hal::digital::OutputPin;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
}

impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Trait for the binary output line the tone renderer toggles
pub trait ToneLine {
    type Error: From<HalError>;

    /// Set line output state (true = high, false = low)
    fn set_state(&mut self, state: bool) -> Result<(), Self::Error>;
}

impl<T: ToneLine + ?Sized> ToneLine for &mut T {
    type Error = T::Error;

    fn set_state(&mut self, state: bool) -> Result<(), Self::Error> {
        (**self).set_state(state)
    }
}

/// Monotonic time source driving all mark and gap timing
///
/// Injected rather than read globally so tests can simulate elapsed time
/// without sleeping.
pub trait Clock {
    /// Microseconds elapsed since an arbitrary fixed origin
    fn now_micros(&self) -> u64;

    /// Block the calling thread of execution for approximately `micros`
    ///
    /// Scheduling slack is tolerated; callers bound total elapsed time with
    /// [`Clock::now_micros`], not by counting pauses.
    fn pause(&mut self, micros: u64);
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_micros(&self) -> u64 {
        (**self).now_micros()
    }

    fn pause(&mut self, micros: u64) {
        (**self).pause(micros)
    }
}

/// Generic implementation for embedded-hal compatible output pins
pub struct EmbeddedHalLine<P> {
    pin: P,
    inverted: bool,
}

impl<P> EmbeddedHalLine<P>
where
    P: OutputPin,
{
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Invert the output for active-low wiring
    pub fn inverted(pin: P) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

impl<P> ToneLine for EmbeddedHalLine<P>
where
    P: OutputPin,
{
    type Error = HalError;

    fn set_state(&mut self, state: bool) -> Result<(), Self::Error> {
        let output_state = if self.inverted { !state } else { state };
        if output_state {
            self.pin.set_high().map_err(|_| HalError::GpioError)
        } else {
            self.pin.set_low().map_err(|_| HalError::GpioError)
        }
    }
}

/// Clock backed by [`std::time::Instant`] and a sleeping wait
#[cfg(feature = "std")]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_micros(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }

    fn pause(&mut self, micros: u64) {
        std::thread::sleep(core::time::Duration::from_micros(micros));
    }
}

/// Clock backed by embassy-time, for embedded hosts
#[cfg(feature = "embassy-time")]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl Clock for EmbassyClock {
    fn now_micros(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }

    fn pause(&mut self, micros: u64) {
        embassy_time::block_for(embassy_time::Duration::from_micros(micros));
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;
    use heapless::Vec;

    /// Mock output line recording every state change
    #[derive(Default)]
    pub struct MockLine {
        level: bool,
        set_count: usize,
        high_count: usize,
        head: Vec<bool, 64>,
    }

    impl MockLine {
        pub fn new() -> Self {
            Self::default()
        }

        /// Level from the most recent set
        pub fn level(&self) -> bool {
            self.level
        }

        /// Total number of state changes requested
        pub fn set_count(&self) -> usize {
            self.set_count
        }

        /// Number of sets that drove the line high
        pub fn high_count(&self) -> usize {
            self.high_count
        }

        /// First recorded levels, oldest first (bounded capture)
        pub fn head(&self) -> &[bool] {
            &self.head
        }
    }

    impl ToneLine for MockLine {
        type Error = HalError;

        fn set_state(&mut self, state: bool) -> Result<(), Self::Error> {
            self.level = state;
            self.set_count += 1;
            if state {
                self.high_count += 1;
            }
            self.head.push(state).ok();
            Ok(())
        }
    }

    /// Virtual clock; `pause` advances time instantly
    #[derive(Default)]
    pub struct MockClock {
        now: u64,
    }

    impl MockClock {
        pub fn new() -> Self {
            Self::default()
        }

        /// Advance time without a pause, simulating caller work
        pub fn advance(&mut self, micros: u64) {
            self.now += micros;
        }
    }

    impl Clock for MockClock {
        fn now_micros(&self) -> u64 {
            self.now
        }

        fn pause(&mut self, micros: u64) {
            self.now += micros;
        }
    }
}
