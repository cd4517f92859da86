//! Dictionary quality validation.
//!
//! Checks the bilingual tables for the defects that creep in when one
//! language file is edited without the other: keys missing on one side,
//! empty display strings, strings left untranslated, misspelled keys. The
//! validator only reports: runtime lookups keep their silent raw-key
//! fallback regardless of what it finds. The `audit` binary turns report
//! errors into a nonzero exit for CI.

use regex::Regex;
use std::sync::OnceLock;

use crate::dictionary::Dictionary;
use crate::language::Language;

/// Validation report containing errors and warnings about the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that will be visible to users (missing or empty translations)
    pub errors: Vec<String>,

    /// Suspicious entries worth a look (untranslated strings, odd keys)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the bilingual dictionary.
pub struct DictionaryValidator;

// Key spelling convention (cached for reuse across calls)
static KEY_FORMAT_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate a dictionary.
    ///
    /// Checks performed:
    /// - key-set parity: every key present in one language must be present
    ///   in the other (error)
    /// - empty display strings (error)
    /// - identical Arabic and English strings, usually an untranslated entry
    ///   (warning)
    /// - keys that break the `snake_case` convention (warning)
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate(dictionary: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::check_parity(dictionary, Language::Arabic, Language::English, &mut report);
        Self::check_parity(dictionary, Language::English, Language::Arabic, &mut report);

        for language in Language::ALL {
            for key in Self::sorted_keys(dictionary, language) {
                if let Some(value) = dictionary.get(language, key) {
                    if value.trim().is_empty() {
                        report
                            .errors
                            .push(format!("Empty {} string for key '{}'", language.name(), key));
                    }
                }
            }
        }

        for key in Self::sorted_keys(dictionary, Language::Arabic) {
            let arabic = dictionary.get(Language::Arabic, key);
            let english = dictionary.get(Language::English, key);
            if let (Some(ar), Some(en)) = (arabic, english) {
                if ar == en {
                    report.warnings.push(format!(
                        "Key '{}' has identical strings in both languages ('{}')",
                        key, ar
                    ));
                }
            }
        }

        let key_format =
            KEY_FORMAT_REGEX.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());
        let mut all_keys: Vec<&str> = dictionary
            .keys(Language::Arabic)
            .chain(dictionary.keys(Language::English))
            .collect();
        all_keys.sort_unstable();
        all_keys.dedup();
        for key in all_keys {
            if !key_format.is_match(key) {
                report
                    .warnings
                    .push(format!("Key '{}' does not follow snake_case naming", key));
            }
        }

        report
    }

    fn check_parity(
        dictionary: &Dictionary,
        present: Language,
        missing: Language,
        report: &mut ValidationReport,
    ) {
        for key in Self::sorted_keys(dictionary, present) {
            if !dictionary.contains(missing, key) {
                report.errors.push(format!(
                    "Key '{}' has no {} translation",
                    key,
                    missing.name()
                ));
            }
        }
    }

    // Sorted so reports are stable run to run.
    fn sorted_keys(dictionary: &Dictionary, language: Language) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = dictionary.keys(language).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Shipped Dictionary Tests ====================

    #[test]
    fn test_shipped_dictionary_has_no_errors() {
        let report = DictionaryValidator::validate(Dictionary::global());
        assert!(
            !report.has_errors(),
            "shipped dictionary has errors: {:?}",
            report.errors
        );
    }

    #[test]
    fn test_shipped_keys_follow_naming_convention() {
        let report = DictionaryValidator::validate(Dictionary::global());
        assert!(
            !report
                .warnings
                .iter()
                .any(|w| w.contains("snake_case")),
            "misspelled keys: {:?}",
            report.warnings
        );
    }

    // ==================== Parity Tests ====================

    #[test]
    fn test_missing_english_key_is_error() {
        let dict = Dictionary::from_tables(
            &[("status", "الحالة"), ("battery", "البطارية")],
            &[("status", "Status")],
        );

        let report = DictionaryValidator::validate(&dict);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("battery"));
        assert!(report.errors[0].contains("English"));
    }

    #[test]
    fn test_missing_arabic_key_is_error() {
        let dict = Dictionary::from_tables(
            &[("status", "الحالة")],
            &[("status", "Status"), ("battery", "Battery")],
        );

        let report = DictionaryValidator::validate(&dict);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("battery"));
        assert!(report.errors[0].contains("Arabic"));
    }

    #[test]
    fn test_parity_violation_does_not_change_lookup() {
        let dict = Dictionary::from_tables(&[("only_arabic", "قيمة")], &[]);

        let report = DictionaryValidator::validate(&dict);
        assert!(report.has_errors());

        // The runtime contract is unaffected: fallback, not failure.
        assert_eq!(dict.lookup(Language::English, "only_arabic"), "only_arabic");
        assert_eq!(dict.lookup(Language::Arabic, "only_arabic"), "قيمة");
    }

    // ==================== Content Tests ====================

    #[test]
    fn test_empty_string_is_error() {
        let dict = Dictionary::from_tables(&[("status", "")], &[("status", "Status")]);

        let report = DictionaryValidator::validate(&dict);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Empty"));
    }

    #[test]
    fn test_identical_strings_is_warning() {
        let dict = Dictionary::from_tables(&[("status", "Status")], &[("status", "Status")]);

        let report = DictionaryValidator::validate(&dict);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("identical"));
    }

    #[test]
    fn test_bad_key_spelling_is_warning() {
        let dict = Dictionary::from_tables(
            &[("BadKey", "قيمة")],
            &[("BadKey", "value")],
        );

        let report = DictionaryValidator::validate(&dict);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("snake_case") && w.contains("BadKey")));
    }

    #[test]
    fn test_clean_tables_report_clean() {
        let dict = Dictionary::from_tables(
            &[("status", "الحالة"), ("battery", "البطارية")],
            &[("status", "Status"), ("battery", "Battery")],
        );

        let report = DictionaryValidator::validate(&dict);
        assert!(report.is_clean());
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
