//! RSVP form validation
//!
//! Submission is simulated by the site; only the checks live here. Error messages
//! are translation keys so the form can show them in the active language.

use crate::core::Schedule;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::OnceLock;
use thiserror::Error;

/// Allowed party size per response
pub const GUEST_COUNT_RANGE: RangeInclusive<u32> = 1..=10;

/// Guest response as entered in the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpForm {
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub event_id: String,
    pub attending: bool,
    pub guest_count: u32,
    #[serde(default)]
    pub dietary_restrictions: String,
    #[serde(default)]
    pub message: String,
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self {
            guest_name: String::new(),
            email: String::new(),
            phone: String::new(),
            event_id: String::new(),
            attending: true,
            guest_count: 1,
            dietary_restrictions: String::new(),
            message: String::new(),
        }
    }
}

/// Form field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpField {
    GuestName,
    Email,
    Phone,
    EventId,
    GuestCount,
}

impl fmt::Display for RsvpField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RsvpField::GuestName => "guest_name",
            RsvpField::Email => "email",
            RsvpField::Phone => "phone",
            RsvpField::EventId => "event_id",
            RsvpField::GuestCount => "guest_count",
        };
        f.write_str(name)
    }
}

/// One failed check: the field and the translation key describing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: RsvpField,
    pub message_key: &'static str,
}

/// All failed checks for one submission, in form order
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{} field(s) failed validation", .0.len())]
pub struct RsvpErrors(pub Vec<FieldError>);

impl RsvpErrors {
    pub fn fields(&self) -> impl Iterator<Item = RsvpField> + '_ {
        self.0.iter().map(|e| e.field)
    }

    pub fn get(&self, field: RsvpField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("static email pattern compiles"))
}

impl RsvpForm {
    /// Check every field against the schedule, reporting all failures at once
    pub fn validate(&self, schedule: &Schedule<'_>) -> Result<(), RsvpErrors> {
        let mut errors = Vec::new();
        let mut fail = |field: RsvpField, message_key: &'static str| {
            errors.push(FieldError { field, message_key })
        };

        if self.guest_name.trim().is_empty() {
            fail(RsvpField::GuestName, "rsvp.error.name_required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            fail(RsvpField::Email, "rsvp.error.email_required");
        } else if !email_pattern().is_match(email) {
            fail(RsvpField::Email, "rsvp.error.email_invalid");
        }

        if self.phone.trim().is_empty() {
            fail(RsvpField::Phone, "rsvp.error.phone_required");
        }

        if schedule.find(self.event_id.trim()).is_none() {
            fail(RsvpField::EventId, "rsvp.error.event_required");
        }

        if !GUEST_COUNT_RANGE.contains(&self.guest_count) {
            fail(RsvpField::GuestCount, "rsvp.error.guest_count_range");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            log::debug!("RSVP rejected: {:?}", errors);
            Err(RsvpErrors(errors))
        }
    }
}
