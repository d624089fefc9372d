//! Time-derived state
//!
//! Everything here takes "now" as an explicit argument. The [`Clock`] trait is
//! the only place the wall clock is read, and only the presentation layer calls it,
//! once per tick, before handing the sampled instant to the pure functions below.
//!
//! - [`countdown`]: remaining days/hours/minutes/seconds until a target instant
//! - [`target`]: building that target from date, 12/24-hour time and a fixed offset
//! - [`theme`]: light/dark/auto preference and the day/night window behind `auto`

pub mod countdown;
pub mod target;
pub mod theme;

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

pub use countdown::{compute_countdown, CountdownBreakdown};
pub use target::{parse_date, parse_offset, parse_time_of_day, TargetInstant};
pub use theme::{resolve_auto_theme, EffectiveTheme, ThemeMode, ThemeStore};

/// Offset of the reference zone (UTC+05:30) in minutes
pub const REFERENCE_OFFSET_MINUTES: u32 = 330;

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for deterministic callers and tests
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Jump to an absolute instant
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Move forward (or backward, with a negative duration)
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_advances() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now(), start + Duration::seconds(90));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }
}
