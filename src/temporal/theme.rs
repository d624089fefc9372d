//! Theme preference and the daylight window behind `auto`
//!
//! `auto` follows daylight at the venue (06:00 to 18:00 in UTC+05:30), not the
//! viewer's device setting, so the effective theme can flip without the stored mode
//! changing. Callers re-check it once a minute while the mode is `auto`.

use super::REFERENCE_OFFSET_MINUTES;
use crate::store::{PreferenceStore, THEME_KEY};
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_DAY: u32 = 1440;
/// First light hour in the reference zone
const DAY_START_HOUR: u32 = 6;
/// First dark hour in the reference zone
const DAY_END_HOUR: u32 = 18;

/// Stored theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    /// Theme actually shown at `now`
    pub fn effective(&self, now: DateTime<Utc>) -> EffectiveTheme {
        match self {
            ThemeMode::Light => EffectiveTheme::Light,
            ThemeMode::Dark => EffectiveTheme::Dark,
            ThemeMode::Auto => resolve_auto_theme(now),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" => Ok(ThemeMode::Auto),
            other => Err(format!("unknown theme mode '{}'", other)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light between 06:00 and 18:00 in UTC+05:30, dark otherwise
pub fn resolve_auto_theme(now: DateTime<Utc>) -> EffectiveTheme {
    let utc_minute = now.hour() * 60 + now.minute();
    let minute_of_day = (utc_minute + REFERENCE_OFFSET_MINUTES) % MINUTES_PER_DAY;
    let hour = minute_of_day / 60;

    if (DAY_START_HOUR..DAY_END_HOUR).contains(&hour) {
        EffectiveTheme::Light
    } else {
        EffectiveTheme::Dark
    }
}

/// Theme preference backed by the preference store
pub struct ThemeStore<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeStore<S> {
    /// Load the stored mode; anything missing or unrecognised means `auto`
    pub fn new(store: S) -> Self {
        let mode = match store.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("Stored theme ignored: {}", e);
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        };

        log::debug!("Theme mode loaded: {}", mode);
        Self { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Change the mode and write it through to storage
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.store.set(THEME_KEY, mode.as_str());
        log::info!("Theme set to: {}", mode);
    }

    pub fn effective(&self, now: DateTime<Utc>) -> EffectiveTheme {
        self.mode.effective(now)
    }

    /// Whether the effective theme can change with time alone
    pub fn needs_refresh(&self) -> bool {
        self.mode == ThemeMode::Auto
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{FixedOffset, TimeZone};
    use std::sync::Arc;

    /// Instant for a wall-clock time in UTC+05:30
    fn ist(hour: u32, minute: u32) -> DateTime<Utc> {
        FixedOffset::east_opt(19_800)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 9, hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_auto_theme_boundaries() {
        assert_eq!(resolve_auto_theme(ist(6, 0)), EffectiveTheme::Light);
        assert_eq!(resolve_auto_theme(ist(17, 59)), EffectiveTheme::Light);
        assert_eq!(resolve_auto_theme(ist(18, 0)), EffectiveTheme::Dark);
        assert_eq!(resolve_auto_theme(ist(5, 59)), EffectiveTheme::Dark);
    }

    #[test]
    fn test_auto_theme_wraps_past_midnight_utc() {
        // 20:00 UTC is 01:30 the next day in IST
        let now = Utc.with_ymd_and_hms(2026, 3, 9, 20, 0, 0).unwrap();
        assert_eq!(resolve_auto_theme(now), EffectiveTheme::Dark);

        // 00:30 UTC is 06:00 IST
        let now = Utc.with_ymd_and_hms(2026, 3, 9, 0, 30, 0).unwrap();
        assert_eq!(resolve_auto_theme(now), EffectiveTheme::Light);
    }

    #[test]
    fn test_explicit_modes_ignore_time() {
        for now in [ist(3, 0), ist(12, 0), ist(22, 0)] {
            assert_eq!(ThemeMode::Light.effective(now), EffectiveTheme::Light);
            assert_eq!(ThemeMode::Dark.effective(now), EffectiveTheme::Dark);
        }
    }

    #[test]
    fn test_default_mode_is_auto() {
        let theme = ThemeStore::new(MemoryStore::new());
        assert_eq!(theme.mode(), ThemeMode::Auto);
        assert!(theme.needs_refresh());
    }

    #[test]
    fn test_corrupt_stored_mode_falls_back_to_auto() {
        let store = MemoryStore::with_entries([(THEME_KEY, "sepia")]);
        let theme = ThemeStore::new(store);
        assert_eq!(theme.mode(), ThemeMode::Auto);
        assert_eq!(theme.effective(ist(12, 0)), EffectiveTheme::Light);
    }

    #[test]
    fn test_mode_persists_across_instances() {
        let store = Arc::new(MemoryStore::new());

        let mut theme = ThemeStore::new(Arc::clone(&store));
        theme.set_mode(ThemeMode::Dark);
        assert!(!theme.needs_refresh());

        let fresh = ThemeStore::new(Arc::clone(&store));
        assert_eq!(fresh.mode(), ThemeMode::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_mode_parsing() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
        }
        assert!("Dark".parse::<ThemeMode>().is_err());
    }
}
