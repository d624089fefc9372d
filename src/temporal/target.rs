//! Target instant parsing
//!
//! Event times are configured the way they are printed on the invitation:
//! a date (`2026-03-09`), a time of day (`6:03 PM`, `18:03`, `6:45 PM onwards`)
//! and the fixed offset of the venue (`+05:30`). The viewer's own zone never
//! enters the calculation.

use crate::core::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

/// A fixed point in time expressed in the venue's offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInstant {
    at: DateTime<FixedOffset>,
}

impl TargetInstant {
    /// Build a target from its three configured parts
    pub fn parse(date: &str, time: &str, offset: &str) -> Result<Self> {
        let date = parse_date(date)?;
        let time = parse_time_of_day(time)?;
        let offset = parse_offset(offset)?;

        let at = offset
            .from_local_datetime(&date.and_time(time))
            .single()
            .ok_or_else(|| Error::InvalidDate(format!("{} {} is not representable", date, time)))?;

        Ok(Self { at })
    }

    pub fn from_datetime(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }

    /// The instant in UTC, as the countdown consumes it
    pub fn instant(&self) -> DateTime<Utc> {
        self.at.with_timezone(&Utc)
    }

    /// The instant in the venue's own offset
    pub fn local(&self) -> DateTime<FixedOffset> {
        self.at
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`)
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("'{}': {}", date_str, e)))
}

/// Parse a time of day in 12-hour (`6:03 PM`) or 24-hour (`18:03`) form.
///
/// `12:xx AM` is just after midnight and `12:xx PM` just after noon. Any text after
/// the meridiem marker is ignored, so `6:45 PM onwards` reads as 18:45. Dotted
/// markers (`p.m.`) are accepted; a word after the clock that starts like a marker
/// but isn't one is rejected rather than read as 24-hour time.
pub fn parse_time_of_day(time_str: &str) -> Result<NaiveTime> {
    let invalid = |reason: &str| Error::InvalidTime(format!("'{}': {}", time_str, reason));

    let mut tokens = time_str.split_whitespace();
    let clock = tokens.next().ok_or_else(|| invalid("empty"))?;

    // "6:03PM" carries its marker glued to the digits
    let (clock, mut meridiem) = split_meridiem(clock);
    if meridiem.is_none() {
        if let Some(next) = tokens.next() {
            meridiem = parse_meridiem(next);
            // "6:45 pn" must not silently become 06:45
            let looks_like_marker = next.starts_with(|c: char| matches!(c, 'a' | 'A' | 'p' | 'P'));
            if meridiem.is_none() && looks_like_marker {
                return Err(invalid("unrecognised AM/PM marker"));
            }
        }
    }

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(invalid("expected H:MM"));
    }

    let hours: u32 = parts[0].parse().map_err(|_| invalid("bad hour"))?;
    let minutes: u32 = parts[1].parse().map_err(|_| invalid("bad minute"))?;
    let seconds: u32 = match parts.get(2) {
        Some(s) => s.parse().map_err(|_| invalid("bad second"))?,
        None => 0,
    };

    let hours = match meridiem {
        Some(m) => {
            if !(1..=12).contains(&hours) {
                return Err(invalid("12-hour clock hour must be 1-12"));
            }
            to_24_hour(hours, m)
        }
        None => hours,
    };

    NaiveTime::from_hms_opt(hours, minutes, seconds).ok_or_else(|| invalid("out of range"))
}

/// Parse a fixed UTC offset: `+05:30`, `-0400`, `+05` or `Z`
pub fn parse_offset(offset_str: &str) -> Result<FixedOffset> {
    let invalid = || Error::InvalidOffset(offset_str.to_string());
    let s = offset_str.trim();

    if s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let (hours, minutes) = match digits.len() {
        2 => (&digits[..2], "0"),
        4 => (&digits[..2], &digits[2..]),
        _ => return Err(invalid()),
    };
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// `AM`, `am`, `a.m.`, `A.M` and friends
fn parse_meridiem(token: &str) -> Option<Meridiem> {
    let letters: String = token
        .chars()
        .filter(|c| *c != '.')
        .collect::<String>()
        .to_ascii_uppercase();
    match letters.as_str() {
        "AM" => Some(Meridiem::Am),
        "PM" => Some(Meridiem::Pm),
        _ => None,
    }
}

fn split_meridiem(token: &str) -> (&str, Option<Meridiem>) {
    match token.find(|c: char| c.is_ascii_alphabetic()) {
        Some(idx) if idx > 0 => match parse_meridiem(&token[idx..]) {
            Some(m) => (&token[..idx], Some(m)),
            None => (token, None),
        },
        _ => (token, None),
    }
}

fn to_24_hour(hours: u32, meridiem: Meridiem) -> u32 {
    match (hours, meridiem) {
        (12, Meridiem::Am) => 0,
        (12, Meridiem::Pm) => 12,
        (h, Meridiem::Am) => h,
        (h, Meridiem::Pm) => h + 12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_midnight_and_noon() {
        let midnight = parse_time_of_day("12:00 AM").unwrap();
        assert_eq!((midnight.hour(), midnight.minute()), (0, 0));

        let noon = parse_time_of_day("12:00 PM").unwrap();
        assert_eq!((noon.hour(), noon.minute()), (12, 0));

        let after_midnight = parse_time_of_day("12:30 am").unwrap();
        assert_eq!((after_midnight.hour(), after_midnight.minute()), (0, 30));
    }

    #[test]
    fn test_evening_time() {
        let t = parse_time_of_day("6:03 PM").unwrap();
        assert_eq!((t.hour(), t.minute()), (18, 3));

        let morning = parse_time_of_day("6:03 AM").unwrap();
        assert_eq!(morning.hour(), 6);
    }

    #[test]
    fn test_suffix_and_compact_forms() {
        let t = parse_time_of_day("6:45 PM onwards").unwrap();
        assert_eq!((t.hour(), t.minute()), (18, 45));

        let t = parse_time_of_day("11:15PM").unwrap();
        assert_eq!((t.hour(), t.minute()), (23, 15));
    }

    #[test]
    fn test_dotted_markers() {
        for text in ["6:45 p.m", "6:45 P.M", "6:45 p.m.", "6:45p.m.", "6:45 P.M. onwards"] {
            let t = parse_time_of_day(text).unwrap();
            assert_eq!((t.hour(), t.minute()), (18, 45), "{:?}", text);
        }

        let t = parse_time_of_day("9:30 a.m").unwrap();
        assert_eq!(t.hour(), 9);
    }

    #[test]
    fn test_unknown_marker_is_rejected() {
        assert!(parse_time_of_day("6:45 pn").is_err());
        assert!(parse_time_of_day("6:45 a").is_err());
        assert!(parse_time_of_day("6:45 Pmm").is_err());
        assert!(parse_time_of_day("6:45pn").is_err());
    }

    #[test]
    fn test_24_hour_clock() {
        let t = parse_time_of_day("20:00").unwrap();
        assert_eq!(t.hour(), 20);

        let t = parse_time_of_day("00:05:30").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (0, 5, 30));
    }

    #[test]
    fn test_invalid_times() {
        assert!(parse_time_of_day("").is_err());
        assert!(parse_time_of_day("13:00 PM").is_err());
        assert!(parse_time_of_day("0:30 AM").is_err());
        assert!(parse_time_of_day("24:00").is_err());
        assert!(parse_time_of_day("6 PM").is_err());
        assert!(parse_time_of_day("six:thirty").is_err());
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("+05:30").unwrap().local_minus_utc(), 19_800);
        assert_eq!(parse_offset("-0400").unwrap().local_minus_utc(), -14_400);
        assert_eq!(parse_offset("+05").unwrap().local_minus_utc(), 18_000);
        assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
        assert!(parse_offset("05:30").is_err());
        assert!(parse_offset("+05:75").is_err());
        assert!(parse_offset("+5:3").is_err());
    }

    #[test]
    fn test_target_instant_uses_fixed_offset() {
        let target = TargetInstant::parse("2026-03-09", "6:03 PM", "+05:30").unwrap();
        let utc = target.instant();
        // 18:03 IST is 12:33 UTC
        assert_eq!((utc.hour(), utc.minute()), (12, 33));
        assert_eq!(target.local().hour(), 18);
    }

    #[test]
    fn test_target_instant_rejects_bad_date() {
        assert!(TargetInstant::parse("2026-02-30", "6:03 PM", "+05:30").is_err());
        assert!(TargetInstant::parse("09/03/2026", "6:03 PM", "+05:30").is_err());
    }
}
