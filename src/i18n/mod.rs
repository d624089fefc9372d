//! Internationalization module
//!
//! Provides translations for English (en), Bengali (bn) and Marathi (mr).
//! The active language is persisted in the preference store; lookups fall back
//! to English and finally to the key itself, so a translation gap never blanks
//! out the page.

mod bn;
mod catalog;
mod en;
mod mr;

pub use catalog::{Catalog, CoverageEntry, Dictionary};

use crate::store::{PreferenceStore, LANGUAGE_KEY};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Bn,
    Mr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Bn, Language::Mr];
    pub const DEFAULT: Language = Language::En;

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
            Language::Mr => "mr",
        }
    }

    /// Exact, case-sensitive match on the code; anything else is unsupported
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "bn" => Some(Language::Bn),
            "mr" => Some(Language::Mr),
            _ => None,
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Bn => "Bengali",
            Language::Mr => "Marathi",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Bn => "\u{09AC}\u{09BE}\u{0982}\u{09B2}\u{09BE}",
            Language::Mr => "\u{092E}\u{0930}\u{093E}\u{0920}\u{0940}",
        }
    }

    /// One-glyph label for compact selectors
    pub fn short_name(&self) -> &'static str {
        match self {
            Language::En => "E",
            Language::Bn => "\u{09AC}\u{09BE}",
            Language::Mr => "\u{092E}",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Active-language holder and key lookup
pub struct LocaleResolver<S: PreferenceStore> {
    catalog: Arc<Catalog>,
    store: S,
    current_lang: Language,
}

impl<S: PreferenceStore> LocaleResolver<S> {
    /// Resolver over the built-in dictionaries
    pub fn new(store: S) -> Self {
        Self::with_catalog(Catalog::builtin(), store)
    }

    /// Resolver over a custom catalog; reads the stored language once
    pub fn with_catalog(catalog: Arc<Catalog>, store: S) -> Self {
        let default = catalog.default_language();
        let current_lang = match store.get(LANGUAGE_KEY) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                log::warn!("Stored language '{}' is not supported, using {}", code, default);
                default
            }),
            None => default,
        };

        log::debug!("Language loaded: {}", current_lang);
        Self {
            catalog,
            store,
            current_lang,
        }
    }

    /// Get the current language
    pub fn active_language(&self) -> Language {
        self.current_lang
    }

    /// Switch language by code and persist it.
    ///
    /// Unsupported codes leave both the active language and the store untouched.
    /// Returns whether the switch happened.
    pub fn set_active_language(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(lang) => {
                self.set_language(lang);
                true
            }
            None => {
                log::warn!("Ignoring unsupported language code '{}'", code);
                false
            }
        }
    }

    /// Switch to an already validated language and persist it
    pub fn set_language(&mut self, lang: Language) {
        self.current_lang = lang;
        self.store.set(LANGUAGE_KEY, lang.code());
        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    ///
    /// Active language first, then the default language, then the key itself.
    pub fn translate(&self, key: &str) -> String {
        self.catalog
            .lookup(self.current_lang, key)
            .or_else(|| self.catalog.lookup(self.catalog.default_language(), key))
            .unwrap_or(key)
            .to_string()
    }

    /// Every key the active or default dictionary knows, resolved the way
    /// `translate` resolves it
    pub fn get_all(&self) -> HashMap<String, String> {
        let mut all: HashMap<String, String> = self
            .catalog
            .dictionary(self.catalog.default_language())
            .map(|d| d.entries().clone())
            .unwrap_or_default();

        if let Some(active) = self.catalog.dictionary(self.current_lang) {
            all.extend(active.entries().iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        all
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get available languages as (code, native name)
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        Language::ALL
            .iter()
            .map(|lang| (lang.code(), lang.native_name()))
            .collect()
    }
}
