use serde::{Deserialize, Serialize};

use crate::document::Document;

use super::EventKind;

/// Element filter a binding is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `a[href^="#"]`
    FragmentLink,
    /// `#container input[type=checkbox]`
    CheckboxWithin(String),
}

impl Selector {
    pub fn matches<D: Document + ?Sized>(&self, document: &D, element_id: &str) -> bool {
        match self {
            Self::Id(id) => id == element_id,
            Self::Class(class) => document.has_class(element_id, class),
            Self::FragmentLink => document
                .attribute(element_id, "href")
                .is_some_and(|href| href.starts_with('#')),
            Self::CheckboxWithin(container) => document
                .checkboxes_within(container)
                .iter()
                .any(|checkbox| checkbox.id == element_id),
        }
    }
}

/// Named handler functions the controller knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerId {
    ToggleNav,
    ScrollToAnchor,
    AddToCart,
    SubmitNewsletter,
    OpenBuilder,
    CloseBuilder,
    BuilderBackdropClick,
    RecomputeBuilderTotal,
    ConfirmOrder,
}

/// Typed `(event kind, selector, handler)` registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerBinding {
    pub kind: EventKind,
    pub selector: Selector,
    pub handler: HandlerId,
}

impl HandlerBinding {
    #[must_use]
    pub fn new(kind: EventKind, selector: Selector, handler: HandlerId) -> Self {
        Self {
            kind,
            selector,
            handler,
        }
    }
}

/// Ordered registry of handler bindings.
///
/// Lookups preserve registration order, matching how listeners attached to
/// the same element fire in a browser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BindingTable {
    bindings: Vec<HandlerBinding>,
}

impl BindingTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, binding: HandlerBinding) {
        self.bindings.push(binding);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandlerBinding> {
        self.bindings.iter()
    }

    /// Handlers bound to `element_id` for `kind`, in registration order.
    pub fn matching<'a, D: Document + ?Sized>(
        &'a self,
        kind: EventKind,
        element_id: &'a str,
        document: &'a D,
    ) -> impl Iterator<Item = HandlerId> + 'a {
        self.bindings
            .iter()
            .filter(move |binding| {
                binding.kind == kind && binding.selector.matches(document, element_id)
            })
            .map(|binding| binding.handler)
    }
}
