//! Core module - Configuration, schedule, RSVP and common types

mod config;
mod error;
mod rsvp;
mod schedule;
mod types;

pub use config::{Config, GeneralConfig, WeddingConfig};
pub use error::{Error, Result};
pub use rsvp::{FieldError, RsvpErrors, RsvpField, RsvpForm, GUEST_COUNT_RANGE};
pub use schedule::{CalendarSlot, EventDetails, Schedule};
pub use types::HeroSnapshot;
