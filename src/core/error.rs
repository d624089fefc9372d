//! Error types for the application

use thiserror::Error;

/// Application-wide error type
///
/// The locale, countdown and theme paths never surface these: they degrade to
/// defaults instead. Only configuration, parsing and RSVP validation return them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("RSVP rejected: {0}")]
    Rsvp(#[from] crate::core::RsvpErrors),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
