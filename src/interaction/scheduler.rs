use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// Deferred work the controller knows how to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledAction {
    /// Restore a button's label after transient feedback.
    RevertLabel { element_id: String, label: String },
}

impl ScheduledAction {
    #[must_use]
    pub fn element_id(&self) -> &str {
        match self {
            Self::RevertLabel { element_id, .. } => element_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub due_at: Duration,
    pub action: ScheduledAction,
}

/// Cancellable one-shot task queue driven by a virtual clock.
///
/// The clock only moves through `advance`, so behavior is deterministic and
/// independent of wall time.
#[derive(Debug, Clone, Default)]
pub struct TaskScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<ScheduledTask>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule_after(&mut self, delay: Duration, action: ScheduledAction) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTask {
            id,
            due_at: self.now.saturating_add(delay),
            action,
        });
        id
    }

    /// Returns the cancelled task, if it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> Option<ScheduledTask> {
        let position = self.pending.iter().position(|task| task.id == id)?;
        Some(self.pending.remove(position))
    }

    /// Cancels every task that targets `element_id`.
    pub fn cancel_for_element(&mut self, element_id: &str) -> usize {
        let before = self.pending.len();
        self.pending
            .retain(|task| task.action.element_id() != element_id);
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn pending_for_element(&self, element_id: &str) -> Option<&ScheduledTask> {
        self.pending
            .iter()
            .find(|task| task.action.element_id() == element_id)
    }

    /// Moves the clock forward and drains tasks that became due, ordered by
    /// due time and then by scheduling order.
    pub fn advance(&mut self, delta: Duration) -> Vec<ScheduledTask> {
        self.now = self.now.saturating_add(delta);
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|task| task.due_at <= now);
        self.pending = pending;
        due.sort_by_key(|task| (task.due_at, task.id));
        due
    }
}
