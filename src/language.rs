//! Language type: the two interface languages and their metadata.
//!
//! The dashboard ships in exactly two languages, Arabic (the default) and
//! English. Everything downstream (the dictionary, the preference store,
//! the page renderer) works in terms of this type rather than raw strings.

use anyhow::{bail, Result};

/// An interface language supported by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Arabic, the default language. Rendered right-to-left.
    Arabic,
    /// English. Rendered left-to-right.
    English,
}

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Right-to-left.
    Rtl,
    /// Left-to-right.
    Ltr,
}

impl Direction {
    /// Get the direction as the attribute value used in document metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

impl Language {
    /// Both supported languages, in display order.
    pub const ALL: [Language; 2] = [Language::Arabic, Language::English];

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (`"ar"` or `"en"`)
    ///
    /// # Returns
    /// * `Ok(Language)` if the code names a supported language
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        match code {
            "ar" => Ok(Language::Arabic),
            "en" => Ok(Language::English),
            _ => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the ISO 639-1 language code (`"ar"` or `"en"`).
    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    /// Get the English name of the language.
    pub fn name(self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::English => "English",
        }
    }

    /// Get the language name in its native form.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Arabic => "العربية",
            Language::English => "English",
        }
    }

    /// Get the short marker shown on the language toggle control.
    ///
    /// The toggle always advertises the language a click would switch *to*,
    /// so the marker is compact: `"ع"` for Arabic, `"EN"` for English.
    pub fn short_marker(self) -> &'static str {
        match self {
            Language::Arabic => "ع",
            Language::English => "EN",
        }
    }

    /// Get the text direction of the language.
    pub fn direction(self) -> Direction {
        match self {
            Language::Arabic => Direction::Rtl,
            Language::English => Direction::Ltr,
        }
    }

    /// Get the other language.
    ///
    /// With exactly two languages this is an involution:
    /// `lang.toggled().toggled() == lang`.
    pub fn toggled(self) -> Language {
        match self {
            Language::Arabic => Language::English,
            Language::English => Language::Arabic,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
