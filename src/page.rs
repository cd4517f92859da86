//! The presentation seam: an abstract sink for document mutations, plus an
//! in-memory page model implementing it.
//!
//! The language manager never touches a real document. Everything it does to
//! the presentation layer, from language and direction metadata to element
//! facets and the toggle control, goes through the [`PresentationSink`]
//! trait, so the core logic runs identically against a live UI bridge or
//! against the in-memory [`Page`] used by the binaries and the tests.

use std::collections::BTreeMap;

use crate::bindings::{Binding, Facet};
use crate::language::{Direction, Language};

/// Stable identifier of the language toggle control.
///
/// Re-initialization detects an existing control by this identifier instead
/// of creating a duplicate.
pub const TOGGLE_CONTROL_ID: &str = "langToggle";

/// Everything the language manager is allowed to do to the presentation
/// layer.
pub trait PresentationSink {
    /// Collect the translation-key declarations of every element.
    ///
    /// Called once at initialization; the result is replayed on every
    /// language change.
    fn declared_bindings(&self) -> Vec<Binding>;

    /// Set the document's language metadata.
    fn set_document_language(&mut self, language: Language);

    /// Set the document's text-direction metadata.
    fn set_document_direction(&mut self, direction: Direction);

    /// Write a display string into an element's text facet.
    ///
    /// Text-input-like elements that already carry a placeholder receive the
    /// value as their placeholder instead. Unknown element identifiers are
    /// ignored.
    fn set_text(&mut self, element_id: &str, value: &str);

    /// Write a display string into an element's placeholder facet.
    fn set_placeholder(&mut self, element_id: &str, value: &str);

    /// Write a display string into an element's title facet.
    fn set_title(&mut self, element_id: &str, value: &str);

    /// Ensure the language toggle control exists.
    ///
    /// # Returns
    /// `true` when the control was created by this call, `false` when one
    /// already existed.
    fn ensure_toggle_control(&mut self) -> bool;

    /// Set the toggle control's visible label. No-op without a control.
    fn set_toggle_label(&mut self, label: &str);
}

/// One element of the page model.
///
/// The `*_key` fields are the element's declarative bindings; the remaining
/// fields are its rendered state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Rendered body text
    pub text: Option<String>,

    /// Rendered placeholder
    pub placeholder: Option<String>,

    /// Rendered title (tooltip)
    pub title: Option<String>,

    /// Whether this element behaves like a text input
    pub is_text_input: bool,

    /// Declared key for the text facet
    pub text_key: Option<String>,

    /// Declared key for the placeholder facet
    pub placeholder_key: Option<String>,

    /// Declared key for the title facet
    pub title_key: Option<String>,
}

/// An in-memory document: elements keyed by identifier and document
/// metadata. The toggle control is an ordinary element stored under
/// [`TOGGLE_CONTROL_ID`], which is how duplicates are detected.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: BTreeMap<String, Element>,
    document_language: Option<Language>,
    document_direction: Option<Direction>,
}

impl Page {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element under a stable identifier.
    ///
    /// An existing element with the same identifier is replaced.
    pub fn add_element(&mut self, id: impl Into<String>, element: Element) {
        self.elements.insert(id.into(), element);
    }

    /// Get an element by identifier.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Iterate over elements in identifier order.
    pub fn elements(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.elements.iter().map(|(id, el)| (id.as_str(), el))
    }

    /// The document's language metadata, once set.
    pub fn document_language(&self) -> Option<Language> {
        self.document_language
    }

    /// The document's text-direction metadata, once set.
    pub fn document_direction(&self) -> Option<Direction> {
        self.document_direction
    }

    /// Whether the toggle control exists.
    pub fn has_toggle_control(&self) -> bool {
        self.elements.contains_key(TOGGLE_CONTROL_ID)
    }

    /// The toggle control's current label, if the control exists.
    pub fn toggle_label(&self) -> Option<&str> {
        self.elements
            .get(TOGGLE_CONTROL_ID)
            .and_then(|el| el.text.as_deref())
    }
}

impl PresentationSink for Page {
    fn declared_bindings(&self) -> Vec<Binding> {
        let mut bindings = Vec::new();
        for (id, element) in &self.elements {
            if let Some(key) = &element.text_key {
                bindings.push(Binding::new(id.clone(), Facet::Text, key.clone()));
            }
            if let Some(key) = &element.placeholder_key {
                bindings.push(Binding::new(id.clone(), Facet::Placeholder, key.clone()));
            }
            if let Some(key) = &element.title_key {
                bindings.push(Binding::new(id.clone(), Facet::Title, key.clone()));
            }
        }
        bindings
    }

    fn set_document_language(&mut self, language: Language) {
        self.document_language = Some(language);
    }

    fn set_document_direction(&mut self, direction: Direction) {
        self.document_direction = Some(direction);
    }

    fn set_text(&mut self, element_id: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(element_id) {
            // A text binding on an input that already carries a placeholder
            // updates the placeholder, not the (nonexistent) body text.
            if element.is_text_input && element.placeholder.is_some() {
                element.placeholder = Some(value.to_string());
            } else {
                element.text = Some(value.to_string());
            }
        }
    }

    fn set_placeholder(&mut self, element_id: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(element_id) {
            element.placeholder = Some(value.to_string());
        }
    }

    fn set_title(&mut self, element_id: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(element_id) {
            element.title = Some(value.to_string());
        }
    }

    fn ensure_toggle_control(&mut self) -> bool {
        if self.elements.contains_key(TOGGLE_CONTROL_ID) {
            return false;
        }
        self.elements
            .insert(TOGGLE_CONTROL_ID.to_string(), Element::default());
        true
    }

    fn set_toggle_label(&mut self, label: &str) {
        if let Some(toggle) = self.elements.get_mut(TOGGLE_CONTROL_ID) {
            toggle.text = Some(label.to_string());
        }
    }
}
