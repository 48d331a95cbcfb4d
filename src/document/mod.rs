mod fixture;
mod memory_document;
mod patch;

pub use fixture::sample_storefront_document;
pub use memory_document::{ElementKind, MemoryDocument, MemoryElement, ScrollRecord};
pub use patch::{DomMutation, DomPatch, ScrollBehavior, ScrollBlock};

use serde::{Deserialize, Serialize};

use crate::error::StorefrontResult;

/// One `<option>` of a select element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// Raw `data-price` metadata, if any.
    pub price: Option<String>,
    pub selected: bool,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            price: None,
            selected: false,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// One checkbox found inside a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxState {
    pub id: String,
    pub value: String,
    pub checked: bool,
}

/// Contract implemented by any page backend.
///
/// Reads are explicit queries; writes arrive as a fully materialized
/// `DomPatch` so controller logic stays isolated from the concrete document.
pub trait Document {
    fn contains(&self, id: &str) -> bool;
    fn parent_of(&self, id: &str) -> Option<String>;
    fn text(&self, id: &str) -> Option<String>;
    fn value(&self, id: &str) -> Option<String>;
    fn attribute(&self, id: &str, name: &str) -> Option<String>;
    fn has_class(&self, id: &str, class: &str) -> bool;
    fn select_options(&self, id: &str) -> Vec<SelectOption>;
    /// Checkboxes that descend from `container_id`, in document order.
    fn checkboxes_within(&self, container_id: &str) -> Vec<CheckboxState>;
    fn apply(&mut self, patch: &DomPatch) -> StorefrontResult<()>;

    /// The selected option, falling back to the first one like a browser does.
    fn selected_option(&self, id: &str) -> Option<SelectOption> {
        let options = self.select_options(id);
        let selected = options.iter().position(|option| option.selected);
        options.into_iter().nth(selected.unwrap_or(0))
    }
}
