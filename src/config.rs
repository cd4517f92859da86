use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::language::Language;
use crate::store::FilePreferenceStore;

#[derive(Debug, Clone)]
pub struct Config {
    // Where the language preference is persisted
    pub preference_path: PathBuf,

    // Used when the store holds no preference
    pub default_language: Language,

    // Run the dictionary audit at startup and log the findings
    pub audit_on_start: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            preference_path: std::env::var("PREFERENCE_FILE")
                .ok()
                .map(PathBuf::from)
                .or_else(FilePreferenceStore::default_path)
                .context("could not determine a preference file location; set PREFERENCE_FILE")?,

            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(code) => Language::from_code(&code)
                    .context("DEFAULT_LANGUAGE must be 'ar' or 'en'")?,
                Err(_) => Language::Arabic,
            },

            audit_on_start: std::env::var("AUDIT_ON_START")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        })
    }
}
