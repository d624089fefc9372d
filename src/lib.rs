//! Sacred Union library
//!
//! Locale resolution, countdown and theme logic behind the wedding invitation
//! site, exposed for the CLI shell and for tests.

pub mod core;
pub mod i18n;
pub mod store;
pub mod temporal;
