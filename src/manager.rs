//! The language manager: owns the active language and drives every change.
//!
//! An explicitly constructed context object, one per page/session. It owns
//! the current language, the dictionary handle, the collected binding
//! registry, and the preference store; document mutation goes through the
//! injected [`PresentationSink`]. Switching languages is atomic from the
//! caller's perspective: `apply` runs synchronously to completion, so no
//! partially rendered state is ever observable.

use tracing::{debug, info, warn};

use crate::bindings::{BindingSet, Facet};
use crate::dictionary::Dictionary;
use crate::language::Language;
use crate::metrics::LanguageMetrics;
use crate::page::PresentationSink;
use crate::store::PreferenceStore;

/// Per-page language state and the operations that change it.
pub struct LanguageManager {
    dictionary: &'static Dictionary,
    store: Box<dyn PreferenceStore>,
    bindings: BindingSet,
    current: Language,
}

impl LanguageManager {
    /// Initialize a manager against a page.
    ///
    /// Reads the stored preference (falling back to `default_language` when
    /// absent), collects the page's declared bindings into the registry,
    /// ensures the toggle control exists (created exactly once; a control
    /// surviving from an earlier initialization is reused), and applies the
    /// resulting language.
    ///
    /// # Arguments
    /// * `store` - The durable preference store
    /// * `default_language` - Used when the store holds no preference
    /// * `sink` - The page being managed
    pub fn initialize(
        store: Box<dyn PreferenceStore>,
        default_language: Language,
        sink: &mut dyn PresentationSink,
    ) -> Self {
        let current = store.load().unwrap_or(default_language);
        let bindings = BindingSet::from_declarations(sink.declared_bindings());
        info!(
            "Initializing language manager: language={}, {} bindings",
            current,
            bindings.len()
        );

        let mut manager = Self {
            dictionary: Dictionary::global(),
            store,
            bindings,
            current,
        };

        if sink.ensure_toggle_control() {
            debug!("Created language toggle control");
        } else {
            debug!("Language toggle control already present");
        }

        manager.apply(current, sink);
        manager
    }

    /// The active language.
    pub fn current(&self) -> Language {
        self.current
    }

    /// The collected binding registry.
    pub fn bindings(&self) -> &BindingSet {
        &self.bindings
    }

    /// Look up a key in the active language.
    ///
    /// Missing keys fall back to the key itself.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.dictionary.lookup(self.current, key)
    }

    /// Switch to the other language.
    pub fn toggle(&mut self, sink: &mut dyn PresentationSink) {
        LanguageMetrics::global().record_toggle();
        let next = self.current.toggled();
        info!("Toggling interface language: {} -> {}", self.current, next);
        self.apply(next, sink);
    }

    /// Make `language` the active, visible, persisted state.
    ///
    /// Safe to call repeatedly with the same language: the rendered page and
    /// the persisted value come out identical. A store write failure is
    /// logged and swallowed; persistence trouble must never block rendering.
    pub fn apply(&mut self, language: Language, sink: &mut dyn PresentationSink) {
        self.current = language;

        if let Err(e) = self.store.save(language) {
            warn!("Failed to persist language preference: {}", e);
        }

        sink.set_document_language(language);
        sink.set_document_direction(language.direction());

        for binding in self.bindings.iter() {
            let value = self.dictionary.lookup(language, &binding.key);
            match binding.facet {
                Facet::Text => sink.set_text(&binding.element_id, value),
                Facet::Placeholder => sink.set_placeholder(&binding.element_id, value),
                Facet::Title => sink.set_title(&binding.element_id, value),
            }
        }

        // The control advertises the language a click would switch to.
        sink.set_toggle_label(language.toggled().short_marker());

        LanguageMetrics::global().record_apply();
        debug!(
            "Applied {} across {} bindings",
            language,
            self.bindings.len()
        );
    }
}

impl std::fmt::Debug for LanguageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageManager")
            .field("current", &self.current)
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Direction;
    use crate::page::{Element, Page};
    use crate::store::{MemoryPreferenceStore, StoreError};

    fn login_page() -> Page {
        let mut page = Page::new();
        page.add_element(
            "login-title",
            Element {
                text_key: Some("login_title".to_string()),
                ..Element::default()
            },
        );
        page.add_element(
            "login-btn",
            Element {
                text_key: Some("login_button".to_string()),
                ..Element::default()
            },
        );
        page.add_element(
            "username-input",
            Element {
                is_text_input: true,
                placeholder_key: Some("username".to_string()),
                ..Element::default()
            },
        );
        page.add_element("decoration", Element::default());
        page
    }

    fn fresh_manager(page: &mut Page) -> LanguageManager {
        LanguageManager::initialize(
            Box::new(MemoryPreferenceStore::new()),
            Language::Arabic,
            page,
        )
    }

    // ==================== Initialization Tests ====================

    #[test]
    fn test_initialize_defaults_to_arabic() {
        let mut page = login_page();
        let manager = fresh_manager(&mut page);

        assert_eq!(manager.current(), Language::Arabic);
        assert_eq!(page.document_language(), Some(Language::Arabic));
        assert_eq!(page.document_direction(), Some(Direction::Rtl));
        assert_eq!(page.toggle_label(), Some("EN"));
    }

    #[test]
    fn test_initialize_honors_stored_preference() {
        let mut page = login_page();
        let manager = LanguageManager::initialize(
            Box::new(MemoryPreferenceStore::with_language(Language::English)),
            Language::Arabic,
            &mut page,
        );

        assert_eq!(manager.current(), Language::English);
        assert_eq!(page.document_direction(), Some(Direction::Ltr));
        assert_eq!(page.toggle_label(), Some("ع"));
    }

    #[test]
    fn test_initialize_collects_bindings() {
        let mut page = login_page();
        let manager = fresh_manager(&mut page);
        // login-title, login-btn, username-input; the bare decoration
        // element declares nothing.
        assert_eq!(manager.bindings().len(), 3);
    }

    #[test]
    fn test_initialize_renders_page() {
        let mut page = login_page();
        fresh_manager(&mut page);

        assert_eq!(
            page.element("login-btn").unwrap().text.as_deref(),
            Some("تسجيل الدخول")
        );
        assert_eq!(
            page.element("username-input").unwrap().placeholder.as_deref(),
            Some("اسم المستخدم")
        );
    }

    #[test]
    fn test_reinitialize_keeps_single_toggle_control() {
        let mut page = login_page();
        let first = fresh_manager(&mut page);
        assert!(page.has_toggle_control());
        drop(first);

        // A second manager over the same page must reuse the control.
        let second = LanguageManager::initialize(
            Box::new(MemoryPreferenceStore::with_language(Language::English)),
            Language::Arabic,
            &mut page,
        );
        assert!(page.has_toggle_control());
        assert_eq!(second.current(), Language::English);
        assert_eq!(page.toggle_label(), Some("ع"));
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_toggle_switches_everything() {
        let mut page = login_page();
        let mut manager = fresh_manager(&mut page);

        manager.toggle(&mut page);

        assert_eq!(manager.current(), Language::English);
        assert_eq!(page.document_language(), Some(Language::English));
        assert_eq!(page.document_direction(), Some(Direction::Ltr));
        assert_eq!(page.toggle_label(), Some("ع"));
        assert_eq!(page.element("login-btn").unwrap().text.as_deref(), Some("Login"));
        assert_eq!(
            page.element("username-input").unwrap().placeholder.as_deref(),
            Some("Username")
        );
    }

    #[test]
    fn test_double_toggle_restores_initial_state() {
        let mut page = login_page();
        let mut manager = fresh_manager(&mut page);
        let initial_page = page.clone();

        manager.toggle(&mut page);
        manager.toggle(&mut page);

        assert_eq!(manager.current(), Language::Arabic);
        assert_eq!(page.document_language(), initial_page.document_language());
        assert_eq!(page.document_direction(), initial_page.document_direction());
        assert_eq!(page.toggle_label(), initial_page.toggle_label());
        for (id, element) in initial_page.elements() {
            assert_eq!(page.element(id), Some(element), "element '{}' diverged", id);
        }
    }

    #[test]
    fn test_toggle_leaves_unbound_elements_alone() {
        let mut page = login_page();
        let mut manager = fresh_manager(&mut page);

        manager.toggle(&mut page);

        let decoration = page.element("decoration").unwrap();
        assert_eq!(decoration.text, None);
        assert_eq!(decoration.placeholder, None);
        assert_eq!(decoration.title, None);
    }

    // ==================== Apply Tests ====================

    #[test]
    fn test_apply_is_idempotent() {
        let mut page = login_page();
        let mut manager = fresh_manager(&mut page);

        manager.apply(Language::English, &mut page);
        let once = page.clone();
        manager.apply(Language::English, &mut page);

        assert_eq!(page.document_language(), once.document_language());
        assert_eq!(page.toggle_label(), once.toggle_label());
        for (id, element) in once.elements() {
            assert_eq!(page.element(id), Some(element));
        }
    }

    #[test]
    fn test_apply_persists_language() {
        use std::cell::RefCell;
        use std::rc::Rc;

        // Store handle shared between the test and the manager's box.
        #[derive(Clone, Default)]
        struct SharedStore(Rc<RefCell<Option<Language>>>);

        impl PreferenceStore for SharedStore {
            fn load(&self) -> Option<Language> {
                *self.0.borrow()
            }
            fn save(&mut self, language: Language) -> Result<(), StoreError> {
                *self.0.borrow_mut() = Some(language);
                Ok(())
            }
        }

        let store = SharedStore::default();
        let mut page = login_page();
        let mut manager =
            LanguageManager::initialize(Box::new(store.clone()), Language::Arabic, &mut page);

        // Initialization already persists the resolved default.
        assert_eq!(store.load(), Some(Language::Arabic));

        manager.apply(Language::English, &mut page);
        assert_eq!(store.load(), Some(Language::English));
    }

    #[test]
    fn test_apply_survives_store_failure() {
        struct FailingStore;

        impl PreferenceStore for FailingStore {
            fn load(&self) -> Option<Language> {
                None
            }
            fn save(&mut self, _language: Language) -> Result<(), StoreError> {
                Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )))
            }
        }

        let mut page = login_page();
        let mut manager =
            LanguageManager::initialize(Box::new(FailingStore), Language::Arabic, &mut page);

        // Rendering must complete despite the failing store.
        manager.toggle(&mut page);
        assert_eq!(manager.current(), Language::English);
        assert_eq!(page.element("login-btn").unwrap().text.as_deref(), Some("Login"));
    }

    // ==================== Translate Tests ====================

    #[test]
    fn test_translate_uses_current_language() {
        let mut page = login_page();
        let mut manager = fresh_manager(&mut page);

        assert_eq!(manager.translate("login_button"), "تسجيل الدخول");
        manager.toggle(&mut page);
        assert_eq!(manager.translate("login_button"), "Login");
    }

    #[test]
    fn test_translate_missing_key_falls_back() {
        let mut page = login_page();
        let manager = fresh_manager(&mut page);
        assert_eq!(manager.translate("definitely_missing"), "definitely_missing");
    }

    // ==================== Missing Key Rendering Tests ====================

    #[test]
    fn test_missing_key_renders_raw_key() {
        let mut page = Page::new();
        page.add_element(
            "broken",
            Element {
                text_key: Some("not_in_dictionary".to_string()),
                ..Element::default()
            },
        );

        fresh_manager(&mut page);
        assert_eq!(
            page.element("broken").unwrap().text.as_deref(),
            Some("not_in_dictionary")
        );
    }
}
