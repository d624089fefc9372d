//! Countdown to the wedding

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time split into display units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownBreakdown {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CountdownBreakdown {
    /// All units zero: the target has been reached
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Whole seconds represented by the breakdown
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }
}

/// Split `target - now` into days, hours, minutes and seconds.
///
/// Each unit truncates toward zero. Once `now` reaches the target the result stays at
/// zero; it never goes negative. Callers must pass a freshly sampled `now` on every tick.
pub fn compute_countdown(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownBreakdown {
    let delta_ms = target.timestamp_millis().saturating_sub(now.timestamp_millis());
    if delta_ms <= 0 {
        return CountdownBreakdown::default();
    }

    let days = delta_ms / MS_PER_DAY;
    let rem = delta_ms % MS_PER_DAY;
    let hours = rem / MS_PER_HOUR;
    let rem = rem % MS_PER_HOUR;
    let minutes = rem / MS_PER_MINUTE;
    let seconds = (rem % MS_PER_MINUTE) / MS_PER_SECOND;

    CountdownBreakdown {
        days: days as u64,
        hours: hours as u32,
        minutes: minutes as u32,
        seconds: seconds as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 9, 12, 33, 0).unwrap()
    }

    #[test]
    fn test_exact_decomposition() {
        let now = target() - Duration::milliseconds(90_061_000);
        let c = compute_countdown(target(), now);
        assert_eq!(
            c,
            CountdownBreakdown { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
    }

    #[test]
    fn test_sub_second_remainder_truncates() {
        let now = target() - Duration::milliseconds(1_999);
        let c = compute_countdown(target(), now);
        assert_eq!(c.seconds, 1);

        let now = target() - Duration::milliseconds(999);
        assert!(compute_countdown(target(), now).is_zero());
    }

    #[test]
    fn test_terminal_clamp() {
        assert!(compute_countdown(target(), target()).is_zero());
        assert!(compute_countdown(target(), target() + Duration::seconds(1)).is_zero());
        assert!(compute_countdown(target(), target() + Duration::days(4000)).is_zero());
    }

    #[test]
    fn test_total_seconds() {
        let c = CountdownBreakdown { days: 2, hours: 3, minutes: 4, seconds: 5 };
        assert_eq!(c.total_seconds(), 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
    }

    proptest! {
        #[test]
        fn countdown_matches_remaining_millis(delta_ms in 1i64..10_000_000_000) {
            let now = target() - Duration::milliseconds(delta_ms);
            let c = compute_countdown(target(), now);
            prop_assert!(c.hours < 24);
            prop_assert!(c.minutes < 60);
            prop_assert!(c.seconds < 60);
            prop_assert_eq!(c.total_seconds(), (delta_ms / 1000) as u64);
        }

        #[test]
        fn countdown_decreases_as_now_advances(
            delta_ms in 1_000i64..10_000_000_000,
            step_ms in 1i64..1_000_000,
        ) {
            let now1 = target() - Duration::milliseconds(delta_ms);
            let now2 = now1 + Duration::milliseconds(step_ms);
            let c1 = compute_countdown(target(), now1);
            let c2 = compute_countdown(target(), now2);

            prop_assert!(c2.total_seconds() <= c1.total_seconds());
            if step_ms >= 1_000 {
                prop_assert!(c2.total_seconds() < c1.total_seconds());
            }
        }

        #[test]
        fn countdown_never_negative_after_target(past_ms in 0i64..10_000_000_000) {
            let now = target() + Duration::milliseconds(past_ms);
            prop_assert!(compute_countdown(target(), now).is_zero());
        }
    }
}
