//! Common types used across the application

use crate::i18n::{Language, LocaleResolver};
use crate::store::PreferenceStore;
use crate::temporal::{compute_countdown, CountdownBreakdown, EffectiveTheme, TargetInstant, ThemeStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hero section state pushed to the view on every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSnapshot {
    pub language: Language,
    pub title: String,
    pub countdown_title: String,
    pub countdown: CountdownBreakdown,
    /// Localized labels for days, hours, minutes, seconds
    pub unit_labels: [String; 4],
    pub effective_theme: EffectiveTheme,
    /// Timestamp of the sample (Unix seconds)
    pub sampled_at: i64,
}

impl HeroSnapshot {
    /// Sample every derived value against one instant
    pub fn capture<L, T>(
        i18n: &LocaleResolver<L>,
        theme: &ThemeStore<T>,
        target: &TargetInstant,
        now: DateTime<Utc>,
    ) -> Self
    where
        L: PreferenceStore,
        T: PreferenceStore,
    {
        let countdown = compute_countdown(target.instant(), now);
        let countdown_title = if countdown.is_zero() {
            i18n.translate("hero.countdown.complete")
        } else {
            i18n.translate("hero.countdown_title")
        };

        Self {
            language: i18n.active_language(),
            title: i18n.translate("hero.couple_names"),
            countdown_title,
            countdown,
            unit_labels: [
                i18n.translate("hero.countdown.days"),
                i18n.translate("hero.countdown.hours"),
                i18n.translate("hero.countdown.minutes"),
                i18n.translate("hero.countdown.seconds"),
            ],
            effective_theme: theme.effective(now),
            sampled_at: now.timestamp(),
        }
    }

    /// One-line rendering, e.g. `12 Days 03 Hours 10 Minutes 59 Seconds`
    pub fn countdown_line(&self) -> String {
        let c = &self.countdown;
        format!(
            "{} {}  {:02} {}  {:02} {}  {:02} {}",
            c.days,
            self.unit_labels[0],
            c.hours,
            self.unit_labels[1],
            c.minutes,
            self.unit_labels[2],
            c.seconds,
            self.unit_labels[3],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, LANGUAGE_KEY, THEME_KEY};
    use crate::temporal::ThemeMode;
    use chrono::Duration;
    use std::sync::Arc;

    fn target() -> TargetInstant {
        TargetInstant::parse("2026-03-09", "6:03 PM", "+05:30").unwrap()
    }

    #[test]
    fn test_capture_in_bengali() {
        let store = Arc::new(MemoryStore::with_entries([(LANGUAGE_KEY, "bn"), (THEME_KEY, "auto")]));
        let i18n = LocaleResolver::new(Arc::clone(&store));
        let theme = ThemeStore::new(Arc::clone(&store));

        // 18:03 IST target, one day and one second earlier is 18:02:59 IST: dark
        let now = target().instant() - Duration::days(1) - Duration::seconds(1);
        let snapshot = HeroSnapshot::capture(&i18n, &theme, &target(), now);

        assert_eq!(snapshot.language, Language::Bn);
        assert_eq!(snapshot.countdown.days, 1);
        assert_eq!(snapshot.countdown.seconds, 1);
        assert_eq!(snapshot.unit_labels[0], "দিন");
        assert_eq!(snapshot.effective_theme, EffectiveTheme::Dark);
        assert_eq!(snapshot.countdown_title, "আমাদের শুভ মিলনের বাকি দিন");
    }

    #[test]
    fn test_capture_after_target() {
        let store = Arc::new(MemoryStore::new());
        let i18n = LocaleResolver::new(Arc::clone(&store));
        let mut theme = ThemeStore::new(Arc::clone(&store));
        theme.set_mode(ThemeMode::Light);

        let now = target().instant() + Duration::hours(2);
        let snapshot = HeroSnapshot::capture(&i18n, &theme, &target(), now);

        assert!(snapshot.countdown.is_zero());
        assert_eq!(snapshot.countdown_title, "The celebration has begun!");
        assert_eq!(snapshot.effective_theme, EffectiveTheme::Light);
        assert_eq!(
            snapshot.countdown_line(),
            "0 Days  00 Hours  00 Minutes  00 Seconds"
        );
    }
}
