//! Fixed-period clock for passive income.
//!
//! `draw_web()` fires once per display refresh with no fixed cadence.
//! `PeriodClock` turns wall-clock timestamps into whole timer periods so
//! passive income keeps a steady beat regardless of the refresh rate.

/// Longest gap (ms) credited in one update. A backgrounded tab does not
/// replay minutes of missed periods on return.
const MAX_CATCH_UP_MS: f64 = 5_000.0;

pub struct PeriodClock {
    ms_per_period: f64,
    /// Milliseconds not yet consumed as periods.
    accumulator: f64,
    /// Timestamp of the last update (ms), None before the first frame.
    last_timestamp: Option<f64>,
}

impl PeriodClock {
    /// `periods_per_sec` must be non-zero; the shop config guarantees this.
    pub fn new(periods_per_sec: u32) -> Self {
        Self {
            ms_per_period: 1000.0 / periods_per_sec.max(1) as f64,
            accumulator: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the number of whole periods elapsed since the previous call.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_CATCH_UP_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let periods = (self.accumulator / self.ms_per_period) as u32;
        self.accumulator -= periods as f64 * self.ms_per_period;
        periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_returns_zero() {
        let mut clock = PeriodClock::new(1);
        assert_eq!(clock.update(12_345.0), 0);
    }

    #[test]
    fn one_period_per_second() {
        let mut clock = PeriodClock::new(1);
        clock.update(0.0);
        assert_eq!(clock.update(999.0), 0);
        assert_eq!(clock.update(1000.0), 1);
        assert_eq!(clock.update(1500.0), 0);
    }

    #[test]
    fn remainder_carried_over() {
        let mut clock = PeriodClock::new(4); // 250ms
        clock.update(0.0);
        assert_eq!(clock.update(300.0), 1); // 50ms left over
        assert_eq!(clock.update(500.0), 1); // 50 + 200 = 250
    }

    #[test]
    fn clamp_large_gap() {
        let mut clock = PeriodClock::new(1);
        clock.update(0.0);
        assert_eq!(clock.update(600_000.0), 5);
    }

    #[test]
    fn clock_going_backwards_is_ignored() {
        let mut clock = PeriodClock::new(1);
        clock.update(5_000.0);
        assert_eq!(clock.update(1_000.0), 0);
        assert_eq!(clock.update(2_000.0), 1);
    }

    #[test]
    fn steady_60fps() {
        let mut clock = PeriodClock::new(1);
        clock.update(0.0);
        let mut total = 0u32;
        for i in 1..=180 {
            total += clock.update(i as f64 * 16.667);
        }
        assert!((2..=3).contains(&total), "expected ~3 periods, got {}", total);
    }
}
