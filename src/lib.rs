//! Bilingual (Arabic/English) interface language management for the security
//! dashboard.
//!
//! The dashboard ships every piece of display text in both Arabic and
//! English. This crate owns the translation tables and the machinery that
//! switches the visible language: it persists the choice across sessions,
//! flips the document's text direction (Arabic is right-to-left), rewrites
//! every bound element, and maintains the floating toggle control.
//!
//! # Architecture
//!
//! - `language`: the two `Language`s and their metadata (codes, direction,
//!   toggle markers)
//! - `dictionary`: the static bilingual tables and key lookup with raw-key
//!   fallback
//! - `bindings`: the render registry collected once from element
//!   declarations
//! - `page`: the `PresentationSink` capability trait plus the in-memory
//!   `Page` document model
//! - `store`: the durable `PreferenceStore` trait with file-backed and
//!   in-memory implementations
//! - `manager`: the `LanguageManager` context object (initialize / toggle /
//!   apply)
//! - `validator`: offline dictionary quality checks
//! - `metrics`: lookup and language-change counters
//!
//! # Example
//!
//! ```rust
//! use dashboard_i18n::{Element, Language, LanguageManager, MemoryPreferenceStore, Page};
//!
//! let mut page = Page::new();
//! page.add_element(
//!     "login-btn",
//!     Element {
//!         text_key: Some("login_button".to_string()),
//!         ..Element::default()
//!     },
//! );
//!
//! let mut manager = LanguageManager::initialize(
//!     Box::new(MemoryPreferenceStore::new()),
//!     Language::Arabic,
//!     &mut page,
//! );
//! assert_eq!(page.element("login-btn").unwrap().text.as_deref(), Some("تسجيل الدخول"));
//!
//! manager.toggle(&mut page);
//! assert_eq!(page.element("login-btn").unwrap().text.as_deref(), Some("Login"));
//! ```

pub mod bindings;
pub mod config;
pub mod dictionary;
pub mod language;
pub mod manager;
pub mod metrics;
pub mod page;
pub mod store;
pub mod validator;

pub use bindings::{Binding, BindingSet, Facet};
pub use dictionary::Dictionary;
pub use language::{Direction, Language};
pub use manager::LanguageManager;
pub use metrics::{LanguageMetrics, MetricsReport};
pub use page::{Element, Page, PresentationSink, TOGGLE_CONTROL_ID};
pub use store::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, StoreError, PREFERENCE_KEY,
};
pub use validator::{DictionaryValidator, ValidationReport};
