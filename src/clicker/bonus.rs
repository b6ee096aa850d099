//! Timed, repeating score grants.

use std::num::NonZeroU32;

use crate::error::ClickerError;

/// A bonus that grants `value` every `interval` frames, `remaining` more times.
///
/// The bonus only tracks its own timing. Whoever drives the frames adds
/// `value` to the score when [`Bonus::try_fire`] reports a firing.
#[derive(Clone, Debug, PartialEq)]
pub struct Bonus {
    remaining: u32,
    value: u64,
    interval: NonZeroU32,
}

impl Bonus {
    pub fn new(duration: u32, value: u64, interval: u32) -> Result<Self, ClickerError> {
        let interval = NonZeroU32::new(interval).ok_or(ClickerError::ZeroInterval)?;
        if duration == 0 {
            return Err(ClickerError::ZeroDuration);
        }
        Ok(Self {
            remaining: duration,
            value,
            interval,
        })
    }

    /// Fires when `frame` lands on a multiple of the interval.
    /// Each firing consumes one remaining activation.
    pub fn try_fire(&mut self, frame: u64) -> bool {
        if self.is_expired() || frame % u64::from(self.interval.get()) != 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Activations left before the bonus expires.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn interval(&self) -> u32 {
        self.interval.get()
    }

    /// Frames until the next firing, counted from `frame`.
    pub fn frames_until_next(&self, frame: u64) -> u64 {
        let interval = u64::from(self.interval.get());
        interval - frame % interval
    }
}
