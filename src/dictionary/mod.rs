//! Static bilingual dictionary: every piece of display text, in both languages.
//!
//! The dictionary is fixed configuration data. It is built once on first
//! access (`OnceLock`, same pattern as the metrics singleton) and never
//! mutated afterwards. The two per-language tables live in `ar.rs` and
//! `en.rs`; they are expected to carry the same key set, but that invariant
//! is structural, not enforced here: a missing key falls back to the key
//! itself so a gap shows up on screen instead of breaking rendering. The
//! `validator` module checks parity offline.

mod ar;
mod en;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::language::Language;
use crate::metrics::LanguageMetrics;

/// The complete translation table for both interface languages.
pub struct Dictionary {
    arabic: HashMap<&'static str, &'static str>,
    english: HashMap<&'static str, &'static str>,
}

/// Global dictionary instance (initialized lazily)
static DICTIONARY: OnceLock<Dictionary> = OnceLock::new();

impl Dictionary {
    /// Get the global dictionary instance.
    ///
    /// Builds the lookup tables on first call and returns a reference to the
    /// same instance on subsequent calls.
    pub fn global() -> &'static Dictionary {
        DICTIONARY.get_or_init(|| Dictionary {
            arabic: ar::TABLE.iter().copied().collect(),
            english: en::TABLE.iter().copied().collect(),
        })
    }

    /// Build a dictionary from explicit tables. Used by the validator tests
    /// to exercise defects the shipped tables must never contain.
    #[cfg(test)]
    pub(crate) fn from_tables(
        arabic: &[(&'static str, &'static str)],
        english: &[(&'static str, &'static str)],
    ) -> Dictionary {
        Dictionary {
            arabic: arabic.iter().copied().collect(),
            english: english.iter().copied().collect(),
        }
    }

    fn table(&self, language: Language) -> &HashMap<&'static str, &'static str> {
        match language {
            Language::Arabic => &self.arabic,
            Language::English => &self.english,
        }
    }

    /// Raw table access: the display string for a key, if present.
    ///
    /// Unlike [`Dictionary::lookup`] this records no metrics and applies no
    /// fallback; the validator and other tooling use it to inspect the
    /// tables without skewing counters.
    pub fn get(&self, language: Language, key: &str) -> Option<&'static str> {
        self.table(language).get(key).copied()
    }

    /// Look up the display string for a key in the given language.
    ///
    /// # Arguments
    /// * `language` - The language whose table to consult
    /// * `key` - The translation key
    ///
    /// # Returns
    /// The display string, or the key itself when no translation exists.
    /// Never fails: a missing translation degrades to a visible raw key.
    pub fn lookup<'a>(&self, language: Language, key: &'a str) -> &'a str {
        match self.get(language, key) {
            Some(value) => {
                LanguageMetrics::global().record_lookup_hit();
                value
            }
            None => {
                LanguageMetrics::global().record_lookup_fallback();
                debug!(
                    "No {} translation for key '{}', showing the key itself",
                    language.name(),
                    key
                );
                key
            }
        }
    }

    /// Check whether a key has a translation in the given language.
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.table(language).contains_key(key)
    }

    /// Number of keys in the given language's table.
    pub fn key_count(&self, language: Language) -> usize {
        self.table(language).len()
    }

    /// Iterate over the keys of the given language's table.
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &'static str> + '_ {
        self.table(language).keys().copied()
    }
}
