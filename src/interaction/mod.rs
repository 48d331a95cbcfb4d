mod bindings;
mod scheduler;

pub use bindings::{BindingTable, HandlerBinding, HandlerId, Selector};
pub use scheduler::{ScheduledAction, ScheduledTask, TaskId, TaskScheduler};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Click,
    Change,
    Submit,
}

/// User input delivered to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEvent {
    pub kind: EventKind,
    /// Element the event originated on; handlers on its ancestors see it too.
    pub target: String,
}

impl PageEvent {
    #[must_use]
    pub fn new(kind: EventKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }

    #[must_use]
    pub fn click(target: impl Into<String>) -> Self {
        Self::new(EventKind::Click, target)
    }

    #[must_use]
    pub fn change(target: impl Into<String>) -> Self {
        Self::new(EventKind::Change, target)
    }

    #[must_use]
    pub fn submit(target: impl Into<String>) -> Self {
        Self::new(EventKind::Submit, target)
    }
}

/// Identity pair passed to every handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerContext {
    pub target: String,
    /// Element the matching binding is attached to.
    pub current_target: String,
}

impl HandlerContext {
    /// `true` when the event originated on the bound element itself.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.target == self.current_target
    }
}

/// Aggregate result of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventOutcome {
    pub default_prevented: bool,
    pub handlers_invoked: usize,
}
