//! The render registry: which key renders into which facet of which element.
//!
//! Elements declare their translation keys out of band (see `page`). At
//! initialization the declarations are collected once into a `BindingSet`,
//! and every language change replays the same set instead of re-scanning the
//! document.

/// Which facet of an element a translation key renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    /// The element's body text (or its placeholder, for text-input-like
    /// elements that already carry one).
    Text,
    /// The element's placeholder.
    Placeholder,
    /// The element's title (tooltip) attribute.
    Title,
}

/// One declared binding: render `key` into `facet` of element `element_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Stable identifier of the bound element
    pub element_id: String,

    /// The facet the display string is written into
    pub facet: Facet,

    /// The translation key to look up
    pub key: String,
}

impl Binding {
    /// Create a binding.
    pub fn new(element_id: impl Into<String>, facet: Facet, key: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            facet,
            key: key.into(),
        }
    }
}

/// The set of declared bindings, built once and replayed on every language
/// change.
#[derive(Debug, Clone, Default)]
pub struct BindingSet {
    bindings: Vec<Binding>,
}

impl BindingSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from collected declarations.
    pub fn from_declarations(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    /// Add a binding.
    pub fn push(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    /// Iterate over the bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Number of bindings in the set.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
