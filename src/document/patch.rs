use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// Vertical alignment of a scrolled-to element inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

/// Single visible change requested by a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomMutation {
    SetText {
        id: String,
        text: String,
    },
    SetValue {
        id: String,
        value: String,
    },
    SetAttribute {
        id: String,
        name: String,
        value: String,
    },
    SetClass {
        id: String,
        class: String,
        present: bool,
    },
    /// `value: None` clears the inline property so stylesheets apply again.
    SetStyle {
        id: String,
        property: String,
        value: Option<String>,
    },
    ScrollIntoView {
        id: String,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    },
    /// Blocking user-facing prompt.
    Alert {
        message: String,
    },
}

impl DomMutation {
    /// Element the mutation writes to; `None` for page-level effects.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::SetText { id, .. }
            | Self::SetValue { id, .. }
            | Self::SetAttribute { id, .. }
            | Self::SetClass { id, .. }
            | Self::SetStyle { id, .. }
            | Self::ScrollIntoView { id, .. } => Some(id),
            Self::Alert { .. } => None,
        }
    }

    pub fn validate(&self) -> StorefrontResult<()> {
        if let Some(id) = self.target_id() {
            if id.is_empty() {
                return Err(StorefrontError::InvalidData(
                    "dom mutation target id must not be empty".to_owned(),
                ));
            }
        }
        let named = match self {
            Self::SetAttribute { name, .. } => Some(("attribute name", name)),
            Self::SetClass { class, .. } => Some(("class name", class)),
            Self::SetStyle { property, .. } => Some(("style property", property)),
            _ => None,
        };
        if let Some((what, name)) = named {
            if name.trim().is_empty() {
                return Err(StorefrontError::InvalidData(format!(
                    "dom mutation {what} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Backend-agnostic batch of mutations produced by one handler.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomPatch {
    pub mutations: Vec<DomMutation>,
}

impl DomPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, mutation: DomMutation) -> Self {
        self.mutations.push(mutation);
        self
    }

    pub fn push(&mut self, mutation: DomMutation) {
        self.mutations.push(mutation);
    }

    #[must_use]
    pub fn set_text(self, id: &str, text: impl Into<String>) -> Self {
        self.with(DomMutation::SetText {
            id: id.to_owned(),
            text: text.into(),
        })
    }

    #[must_use]
    pub fn set_value(self, id: &str, value: impl Into<String>) -> Self {
        self.with(DomMutation::SetValue {
            id: id.to_owned(),
            value: value.into(),
        })
    }

    #[must_use]
    pub fn set_attribute(self, id: &str, name: &str, value: impl Into<String>) -> Self {
        self.with(DomMutation::SetAttribute {
            id: id.to_owned(),
            name: name.to_owned(),
            value: value.into(),
        })
    }

    #[must_use]
    pub fn set_class(self, id: &str, class: &str, present: bool) -> Self {
        self.with(DomMutation::SetClass {
            id: id.to_owned(),
            class: class.to_owned(),
            present,
        })
    }

    #[must_use]
    pub fn set_style(self, id: &str, property: &str, value: Option<String>) -> Self {
        self.with(DomMutation::SetStyle {
            id: id.to_owned(),
            property: property.to_owned(),
            value,
        })
    }

    #[must_use]
    pub fn scroll_into_view(self, id: &str, behavior: ScrollBehavior, block: ScrollBlock) -> Self {
        self.with(DomMutation::ScrollIntoView {
            id: id.to_owned(),
            behavior,
            block,
        })
    }

    #[must_use]
    pub fn alert(self, message: impl Into<String>) -> Self {
        self.with(DomMutation::Alert {
            message: message.into(),
        })
    }

    pub fn validate(&self) -> StorefrontResult<()> {
        for mutation in &self.mutations {
            mutation.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mutations.len()
    }
}
