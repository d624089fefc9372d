//! Wedding event schedule

use crate::core::Result;
use crate::temporal::TargetInstant;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Default length of an event when exported to a calendar
const EVENT_DURATION_HOURS: i64 = 4;

/// A single ceremony on the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub id: String,
    pub name: String,
    /// Name in the couple's own language
    #[serde(default)]
    pub local_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Printed time, e.g. `6:03 PM`; empty when the time is not announced
    #[serde(default)]
    pub time: String,
    pub venue: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rituals: Vec<String>,
    #[serde(default)]
    pub significance: String,
    #[serde(default)]
    pub dress_code: String,
}

impl EventDetails {
    /// Start of the event in the venue offset, `None` when no time is announced
    pub fn start_instant(&self, utc_offset: &str) -> Result<Option<TargetInstant>> {
        if self.time.trim().is_empty() {
            return Ok(None);
        }
        TargetInstant::parse(&self.date, &self.time, utc_offset).map(Some)
    }

    /// Start and end data for calendar exports
    pub fn calendar_slot(&self, utc_offset: &str) -> Result<Option<CalendarSlot>> {
        Ok(self.start_instant(utc_offset)?.map(|start| CalendarSlot {
            start: start.local(),
            end: start.local() + Duration::hours(EVENT_DURATION_HOURS),
        }))
    }
}

/// Time window handed to calendar integrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarSlot {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Ordered list of events sharing one venue offset
#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    events: &'a [EventDetails],
    utc_offset: &'a str,
}

impl<'a> Schedule<'a> {
    pub fn new(events: &'a [EventDetails], utc_offset: &'a str) -> Self {
        Self { events, utc_offset }
    }

    pub fn events(&self) -> &'a [EventDetails] {
        self.events
    }

    pub fn find(&self, id: &str) -> Option<&'a EventDetails> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Earliest event that has not started yet.
    ///
    /// Events without an announced time are skipped; unparsable times are logged
    /// and skipped.
    pub fn next_upcoming(&self, now: DateTime<Utc>) -> Option<(&'a EventDetails, TargetInstant)> {
        self.events
            .iter()
            .filter_map(|event| match event.start_instant(self.utc_offset) {
                Ok(start) => start.map(|s| (event, s)),
                Err(e) => {
                    log::warn!("Skipping event '{}': {}", event.id, e);
                    None
                }
            })
            .filter(|(_, start)| start.instant() > now)
            .min_by_key(|(_, start)| start.instant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::default_events;
    use chrono::{TimeZone, Timelike};

    const IST: &str = "+05:30";

    #[test]
    fn test_event_without_time_has_no_instant() {
        let events = default_events();
        let gaye_holud = events.iter().find(|e| e.id == "gaye-holud").unwrap();
        assert!(gaye_holud.start_instant(IST).unwrap().is_none());
        assert!(gaye_holud.calendar_slot(IST).unwrap().is_none());
    }

    #[test]
    fn test_calendar_slot_spans_four_hours() {
        let events = default_events();
        let biye = events.iter().find(|e| e.id == "biye").unwrap();
        let slot = biye.calendar_slot(IST).unwrap().unwrap();

        assert_eq!((slot.start.hour(), slot.start.minute()), (18, 3));
        assert_eq!(slot.end - slot.start, Duration::hours(4));
        assert_eq!(slot.end.hour(), 22);
    }

    #[test]
    fn test_reception_time_with_suffix() {
        let events = default_events();
        let reception = events.iter().find(|e| e.id == "reception").unwrap();
        let start = reception.start_instant(IST).unwrap().unwrap();
        assert_eq!((start.local().hour(), start.local().minute()), (18, 45));
    }

    #[test]
    fn test_next_upcoming() {
        let events = default_events();
        let schedule = Schedule::new(&events, IST);

        let before = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let (event, _) = schedule.next_upcoming(before).unwrap();
        assert_eq!(event.id, "biye");

        let between = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        let (event, _) = schedule.next_upcoming(between).unwrap();
        assert_eq!(event.id, "reception");

        let after = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        assert!(schedule.next_upcoming(after).is_none());
    }

    #[test]
    fn test_next_upcoming_skips_bad_times() {
        let mut events = default_events();
        events[1].time = "soon".to_string();
        let schedule = Schedule::new(&events, IST);

        let before = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let (event, _) = schedule.next_upcoming(before).unwrap();
        assert_eq!(event.id, "reception");
    }

    #[test]
    fn test_find() {
        let events = default_events();
        let schedule = Schedule::new(&events, IST);
        assert!(schedule.find("reception").is_some());
        assert!(schedule.find("sangeet").is_none());
    }
}
