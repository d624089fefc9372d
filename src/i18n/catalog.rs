//! Static dictionaries for every supported language

use super::{bn, en, mr, Language};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Key to display text for one language
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }
}

/// Per-language translation gaps against the default language
#[derive(Debug, Clone, Serialize)]
pub struct CoverageEntry {
    pub language: Language,
    /// Keys in the default dictionary
    pub total: usize,
    /// Default keys with no entry in this language, sorted
    pub missing: Vec<String>,
}

impl CoverageEntry {
    pub fn coverage_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.total - self.missing.len()) as f64 / self.total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// The full set of dictionaries, fixed once built
#[derive(Debug, Clone)]
pub struct Catalog {
    default_language: Language,
    dictionaries: HashMap<Language, Dictionary>,
}

impl Catalog {
    /// Build a catalog; languages without a dictionary behave as empty ones
    pub fn new(default_language: Language, dictionaries: HashMap<Language, Dictionary>) -> Self {
        Self {
            default_language,
            dictionaries,
        }
    }

    /// Shared catalog holding the site's own translations
    pub fn builtin() -> Arc<Catalog> {
        static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let dictionaries = HashMap::from([
                    (Language::En, Dictionary::new(en::get_translations())),
                    (Language::Bn, Dictionary::new(bn::get_translations())),
                    (Language::Mr, Dictionary::new(mr::get_translations())),
                ]);
                Arc::new(Catalog::new(Language::DEFAULT, dictionaries))
            })
            .clone()
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn dictionary(&self, language: Language) -> Option<&Dictionary> {
        self.dictionaries.get(&language)
    }

    /// Raw lookup in one dictionary, no fallback
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.dictionary(language).and_then(|d| d.get(key))
    }

    /// Default-language keys that `language` does not translate
    pub fn missing_keys(&self, language: Language) -> Vec<String> {
        let Some(default) = self.dictionary(self.default_language) else {
            return Vec::new();
        };

        let mut missing: Vec<String> = default
            .keys()
            .filter(|key| self.lookup(language, key).is_none())
            .map(str::to_string)
            .collect();
        missing.sort();
        missing
    }

    /// Coverage of every non-default supported language
    pub fn coverage_report(&self) -> Vec<CoverageEntry> {
        let total = self
            .dictionary(self.default_language)
            .map(Dictionary::len)
            .unwrap_or(0);

        Language::ALL
            .iter()
            .copied()
            .filter(|lang| *lang != self.default_language)
            .map(|language| CoverageEntry {
                language,
                total,
                missing: self.missing_keys(language),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial_catalog() -> Catalog {
        Catalog::new(
            Language::En,
            HashMap::from([
                (Language::En, Dictionary::new([("a", "A"), ("b", "B"), ("c", "C")])),
                (Language::Bn, Dictionary::new([("a", "অ")])),
            ]),
        )
    }

    #[test]
    fn test_builtin_dictionaries_are_complete() {
        let catalog = Catalog::builtin();
        for entry in catalog.coverage_report() {
            assert!(
                entry.is_complete(),
                "{} is missing translations: {:?}",
                entry.language,
                entry.missing
            );
        }
    }

    #[test]
    fn test_builtin_has_no_extra_keys() {
        let catalog = Catalog::builtin();
        let default = catalog.dictionary(Language::En).unwrap();
        for lang in [Language::Bn, Language::Mr] {
            let dict = catalog.dictionary(lang).unwrap();
            let extra: Vec<&str> = dict.keys().filter(|k| !default.contains(k)).collect();
            assert!(extra.is_empty(), "{} has keys unknown to en: {:?}", lang, extra);
        }
    }

    #[test]
    fn test_missing_keys_reports_gaps() {
        let catalog = partial_catalog();
        assert_eq!(catalog.missing_keys(Language::Bn), vec!["b", "c"]);
        // No dictionary at all
        assert_eq!(catalog.missing_keys(Language::Mr), vec!["a", "b", "c"]);
        assert!(catalog.missing_keys(Language::En).is_empty());
    }

    #[test]
    fn test_coverage_report() {
        let report = partial_catalog().coverage_report();
        assert_eq!(report.len(), 2);

        let bn = report.iter().find(|e| e.language == Language::Bn).unwrap();
        assert_eq!(bn.total, 3);
        assert!(!bn.is_complete());
        assert!((bn.coverage_percent() - 100.0 / 3.0).abs() < 1e-9);

        let mr = report.iter().find(|e| e.language == Language::Mr).unwrap();
        assert_eq!(mr.coverage_percent(), 0.0);
    }
}
