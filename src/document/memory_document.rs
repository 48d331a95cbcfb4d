use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StorefrontError, StorefrontResult};

use super::{CheckboxState, Document, DomMutation, DomPatch, ScrollBehavior, ScrollBlock, SelectOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Generic,
    Anchor,
    Button,
    Input,
    Checkbox,
    Select,
    Form,
    Dialog,
}

/// Element node held by `MemoryDocument`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryElement {
    pub kind: ElementKind,
    pub parent: Option<String>,
    pub text: String,
    pub value: String,
    pub checked: bool,
    pub attributes: IndexMap<String, String>,
    pub classes: IndexSet<String>,
    pub styles: IndexMap<String, String>,
    pub options: Vec<SelectOption>,
}

impl MemoryElement {
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            text: String::new(),
            value: String::new(),
            checked: false,
            attributes: IndexMap::new(),
            classes: IndexSet::new(),
            styles: IndexMap::new(),
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    #[must_use]
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }
}

/// One recorded `ScrollIntoView` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRecord {
    pub id: String,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Headless document used by tests and non-browser hosts.
///
/// It applies patches to an in-memory element map and keeps a history of
/// applied mutations, alerts, and scroll requests so callers can assert on
/// every visible effect.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: IndexMap<String, MemoryElement>,
    applied: Vec<DomMutation>,
    alerts: Vec<String>,
    scrolls: Vec<ScrollRecord>,
    skipped_mutations: usize,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>, element: MemoryElement) -> Self {
        self.insert(id, element);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, element: MemoryElement) {
        self.elements.insert(id.into(), element);
    }

    /// Removes `id` and every element below it. Returns the removed count.
    pub fn remove(&mut self, id: &str) -> usize {
        if !self.elements.contains_key(id) {
            return 0;
        }
        let doomed: Vec<String> = self
            .elements
            .keys()
            .filter(|candidate| self.is_same_or_descendant(candidate, id))
            .cloned()
            .collect();
        for candidate in &doomed {
            self.elements.shift_remove(candidate);
        }
        doomed.len()
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Simulates the user typing into a field. No event is raised.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Simulates the user ticking a checkbox. No event is raised.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        match self.elements.get_mut(id) {
            Some(element) if element.kind == ElementKind::Checkbox => {
                element.checked = checked;
                true
            }
            _ => false,
        }
    }

    /// Simulates the user picking `value` in a select. No event is raised.
    pub fn select_option(&mut self, id: &str, value: &str) -> bool {
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        if !element.options.iter().any(|option| option.value == value) {
            return false;
        }
        for option in &mut element.options {
            option.selected = option.value == value;
        }
        true
    }

    #[must_use]
    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|element| element.styles.get(property))
            .map(String::as_str)
    }

    #[must_use]
    pub fn applied_mutations(&self) -> &[DomMutation] {
        &self.applied
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    #[must_use]
    pub fn scroll_history(&self) -> &[ScrollRecord] {
        &self.scrolls
    }

    /// Mutations dropped because their target element no longer exists.
    #[must_use]
    pub fn skipped_mutations(&self) -> usize {
        self.skipped_mutations
    }

    pub fn clear_history(&mut self) {
        self.applied.clear();
        self.alerts.clear();
        self.scrolls.clear();
        self.skipped_mutations = 0;
    }

    fn is_same_or_descendant(&self, candidate: &str, ancestor: &str) -> bool {
        let mut current = Some(candidate);
        let mut hops = 0;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            hops += 1;
            if hops > self.elements.len() {
                return false;
            }
            current = self
                .elements
                .get(id)
                .and_then(|element| element.parent.as_deref());
        }
        false
    }

    fn apply_one(&mut self, mutation: &DomMutation) {
        if let DomMutation::Alert { message } = mutation {
            self.alerts.push(message.clone());
            self.applied.push(mutation.clone());
            return;
        }

        let Some(id) = mutation.target_id() else {
            return;
        };
        let Some(element) = self.elements.get_mut(id) else {
            debug!(element = id, "skipping mutation on missing element");
            self.skipped_mutations += 1;
            return;
        };

        match mutation {
            DomMutation::SetText { text, .. } => element.text = text.clone(),
            DomMutation::SetValue { value, .. } => element.value = value.clone(),
            DomMutation::SetAttribute { name, value, .. } => {
                element.attributes.insert(name.clone(), value.clone());
            }
            DomMutation::SetClass { class, present, .. } => {
                if *present {
                    element.classes.insert(class.clone());
                } else {
                    element.classes.shift_remove(class);
                }
            }
            DomMutation::SetStyle {
                property, value, ..
            } => match value {
                Some(value) => {
                    element.styles.insert(property.clone(), value.clone());
                }
                None => {
                    element.styles.shift_remove(property);
                }
            },
            DomMutation::ScrollIntoView {
                id,
                behavior,
                block,
            } => self.scrolls.push(ScrollRecord {
                id: id.clone(),
                behavior: *behavior,
                block: *block,
            }),
            DomMutation::Alert { .. } => {}
        }
        self.applied.push(mutation.clone());
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn parent_of(&self, id: &str) -> Option<String> {
        self.elements
            .get(id)
            .and_then(|element| element.parent.clone())
    }

    fn text(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|element| element.text.clone())
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|element| element.value.clone())
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements
            .get(id)
            .and_then(|element| element.attributes.get(name).cloned())
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|element| element.classes.contains(class))
    }

    fn select_options(&self, id: &str) -> Vec<SelectOption> {
        self.elements
            .get(id)
            .map(|element| element.options.clone())
            .unwrap_or_default()
    }

    fn checkboxes_within(&self, container_id: &str) -> Vec<CheckboxState> {
        self.elements
            .iter()
            .filter(|(id, element)| {
                element.kind == ElementKind::Checkbox
                    && id.as_str() != container_id
                    && self.is_same_or_descendant(id, container_id)
            })
            .map(|(id, element)| CheckboxState {
                id: id.clone(),
                value: element.value.clone(),
                checked: element.checked,
            })
            .collect()
    }

    fn apply(&mut self, patch: &DomPatch) -> StorefrontResult<()> {
        patch.validate()?;
        for mutation in &patch.mutations {
            self.apply_one(mutation);
        }
        Ok(())
    }
}

impl MemoryDocument {
    /// Parses a document description produced by `to_json_pretty`.
    pub fn from_json_str(input: &str) -> StorefrontResult<Self> {
        let elements: IndexMap<String, MemoryElement> = serde_json::from_str(input)
            .map_err(|e| StorefrontError::InvalidData(format!("failed to parse document json: {e}")))?;
        Ok(Self {
            elements,
            ..Self::default()
        })
    }

    pub fn to_json_pretty(&self) -> StorefrontResult<String> {
        serde_json::to_string_pretty(&self.elements)
            .map_err(|e| StorefrontError::InvalidData(format!("failed to serialize document json: {e}")))
    }
}
