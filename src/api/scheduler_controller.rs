use std::time::Duration;

use tracing::debug;

use crate::document::{Document, DomPatch};
use crate::error::StorefrontResult;
use crate::extensions::PageSignal;
use crate::interaction::ScheduledAction;

use super::PageController;

impl<D: Document> PageController<D> {
    /// Advances the controller clock and runs tasks that became due.
    ///
    /// Returns how many tasks acted on the page. A task whose element is gone
    /// is dropped without touching the document.
    pub fn advance_time(&mut self, delta: Duration) -> StorefrontResult<usize> {
        let mut executed = 0;
        for task in self.scheduler.advance(delta) {
            match task.action {
                ScheduledAction::RevertLabel { element_id, label } => {
                    if !self.document.contains(&element_id) {
                        debug!(element = %element_id, "label revert target removed, skipping");
                        continue;
                    }
                    self.apply_patch(DomPatch::new().set_text(&element_id, label))?;
                    self.emit_signal(PageSignal::LabelReverted { element_id });
                    executed += 1;
                }
            }
        }
        Ok(executed)
    }

    /// Cancels deferred work for an element the host is about to remove.
    pub fn notify_element_removed(&mut self, element_id: &str) -> usize {
        let cancelled = self.scheduler.cancel_for_element(element_id);
        if cancelled > 0 {
            debug!(element = element_id, cancelled, "cancelled tasks for removed element");
        }
        cancelled
    }

    /// Cancels every pending task. Call before dropping the page.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.scheduler.cancel_all();
        debug!(cancelled, "page controller teardown");
        cancelled
    }
}
