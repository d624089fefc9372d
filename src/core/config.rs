//! Configuration management

use crate::core::{Error, EventDetails, Result};
use crate::temporal::TargetInstant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub wedding: WeddingConfig,
    #[serde(default = "default_events")]
    pub events: Vec<EventDetails>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            wedding: WeddingConfig::default(),
            events: default_events(),
        }
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("sacred-union");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, writing defaults there on first run
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the tickers and countdown cannot work with
    fn validate(&self) -> Result<()> {
        if self.general.countdown_tick_ms == 0 || self.general.theme_tick_ms == 0 {
            return Err(Error::Config("Tick intervals must be non-zero".to_string()));
        }
        self.wedding.target()?;

        let mut ids = std::collections::HashSet::new();
        for event in &self.events {
            if !ids.insert(event.id.as_str()) {
                return Err(Error::Config(format!("Duplicate event id '{}'", event.id)));
            }
        }
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Countdown refresh interval in milliseconds
    #[serde(default = "default_countdown_tick")]
    pub countdown_tick_ms: u64,
    /// Auto-theme re-check interval in milliseconds
    #[serde(default = "default_theme_tick")]
    pub theme_tick_ms: u64,
}

fn default_countdown_tick() -> u64 { 1000 }
fn default_theme_tick() -> u64 { 60_000 }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            countdown_tick_ms: default_countdown_tick(),
            theme_tick_ms: default_theme_tick(),
        }
    }
}

/// Couple, date and venue of the main ceremony
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingConfig {
    #[serde(default = "default_bride")]
    pub bride: String,
    #[serde(default = "default_groom")]
    pub groom: String,
    #[serde(default = "default_couple_names_local")]
    pub couple_names_local: String,
    /// Ceremony date (YYYY-MM-DD)
    #[serde(default = "default_main_date")]
    pub main_date: String,
    /// Ceremony time as printed (e.g. "6:03 PM")
    #[serde(default = "default_main_time")]
    pub main_time: String,
    /// Fixed UTC offset of the venue
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default = "default_main_venue")]
    pub main_venue: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_rsvp_deadline")]
    pub rsvp_deadline: String,
}

fn default_bride() -> String { "Subhasree".to_string() }
fn default_groom() -> String { "Mrinmoy".to_string() }
fn default_couple_names_local() -> String { "শুভশ্রী ও মৃন্ময়".to_string() }
fn default_main_date() -> String { "2026-03-09".to_string() }
fn default_main_time() -> String { "6:03 PM".to_string() }
fn default_utc_offset() -> String { "+05:30".to_string() }
fn default_main_venue() -> String { "Shanai Bhavan, Siliguri".to_string() }
fn default_location() -> String { "West Bengal, India".to_string() }
fn default_rsvp_deadline() -> String { "2026-03-01".to_string() }

impl Default for WeddingConfig {
    fn default() -> Self {
        Self {
            bride: default_bride(),
            groom: default_groom(),
            couple_names_local: default_couple_names_local(),
            main_date: default_main_date(),
            main_time: default_main_time(),
            utc_offset: default_utc_offset(),
            main_venue: default_main_venue(),
            location: default_location(),
            rsvp_deadline: default_rsvp_deadline(),
        }
    }
}

impl WeddingConfig {
    pub fn couple_names(&self) -> String {
        format!("{} & {}", self.bride, self.groom)
    }

    /// The instant the countdown runs to
    pub fn target(&self) -> Result<TargetInstant> {
        TargetInstant::parse(&self.main_date, &self.main_time, &self.utc_offset)
    }
}

pub(crate) fn default_events() -> Vec<EventDetails> {
    vec![
        EventDetails {
            id: "gaye-holud".to_string(),
            name: "Gaye Holud".to_string(),
            local_name: "গায়ে হলুদ".to_string(),
            date: "2026-03-09".to_string(),
            time: String::new(),
            venue: "Community Hall, West Bengal".to_string(),
            description: "The most vibrant Bengali pre-wedding ritual where turmeric paste is applied to both bride and groom at their respective homes, symbolizing purification and prosperity.".to_string(),
            rituals: vec![
                "Turmeric ceremony for bride and groom".to_string(),
                "Traditional Bengali breakfast".to_string(),
                "Musical performances and dance".to_string(),
                "Exchange of gifts between families".to_string(),
                "Blessing with rice and fish".to_string(),
            ],
            significance: "Turmeric is considered auspicious and purifying in Bengali culture. This ceremony marks the beginning of the wedding festivities and blesses the couple with prosperity.".to_string(),
            dress_code: "Yellow is mandatory. Traditional Bengali attire preferred.".to_string(),
        },
        EventDetails {
            id: "biye".to_string(),
            name: "Wedding Ceremony".to_string(),
            local_name: "বিয়ে".to_string(),
            date: "2026-03-09".to_string(),
            time: "6:03 PM".to_string(),
            venue: "Shanai Bhavan, Siliguri".to_string(),
            description: "The sacred Bengali wedding ceremony performed according to traditional Vedic rituals, marking the eternal union of two souls and their families.".to_string(),
            rituals: vec![
                "Boron (Welcome ceremony for groom)".to_string(),
                "Saat Paak (Seven rounds around groom)".to_string(),
                "Shubho Drishti (First look exchange)".to_string(),
                "Mala Badal (Exchange of garlands)".to_string(),
                "Saat Paan and Sindoor Daan".to_string(),
                "Agni Parikrama (Seven sacred rounds)".to_string(),
                "Conch shell and traditional blessings".to_string(),
            ],
            significance: "The most sacred moment where two souls unite in the presence of Agni (fire) as witness. The seven rounds represent seven lifetimes of togetherness.".to_string(),
            dress_code: "Traditional Bengali wedding attire. Red and white for bride, cream dhoti for groom.".to_string(),
        },
        EventDetails {
            id: "reception".to_string(),
            name: "Reception".to_string(),
            local_name: "অভ্যর্থনা".to_string(),
            date: "2026-03-22".to_string(),
            time: "6:45 PM onwards".to_string(),
            venue: "RCF Community Hall, Alibag".to_string(),
            description: "A grand celebration to honor the newly married couple with family, friends, and the extended community, featuring traditional Bengali cuisine and cultural performances.".to_string(),
            rituals: vec![
                "Welcome of guests by both families".to_string(),
                "Cultural performances and music".to_string(),
                "Traditional Bengali feast".to_string(),
                "Photography and video sessions".to_string(),
                "Blessing ceremony by community elders".to_string(),
            ],
            significance: "The reception celebrates the union with the wider community and marks the beginning of the couple's new journey together.".to_string(),
            dress_code: "Formal traditional or contemporary attire. All colors welcome.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_default_target() {
        let target = WeddingConfig::default().target().unwrap();
        assert_eq!(target.local().hour(), 18);
        assert_eq!(target.local().minute(), 3);
        assert_eq!(target.local().offset().local_minus_utc(), 19_800);
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.events.len(), 3);
        assert_eq!(config.general.countdown_tick_ms, 1000);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.events, config.events);
        assert_eq!(reloaded.wedding.main_time, "6:03 PM");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[wedding]\nmain_time = \"12:00 PM\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.wedding.main_date, "2026-03-09");
        assert_eq!(config.wedding.target().unwrap().local().hour(), 12);
        assert_eq!(config.general.theme_tick_ms, 60_000);
        assert_eq!(config.events.len(), 3);
    }

    #[test]
    fn test_invalid_target_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[wedding]\nutc_offset = \"IST\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::InvalidOffset(_))));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ncountdown_tick_ms = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_duplicate_event_ids_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.events.push(config.events[0].clone());
        config.save_to(&path).unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
