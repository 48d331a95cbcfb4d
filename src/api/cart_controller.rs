use std::time::Duration;

use tracing::{debug, info};

use crate::core::{format_currency, parse_price_metadata};
use crate::document::{Document, DomPatch};
use crate::error::StorefrontResult;
use crate::extensions::PageSignal;
use crate::interaction::ScheduledAction;

use super::PageController;

impl<D: Document> PageController<D> {
    /// Increments the cart by exactly one and re-renders the badge.
    ///
    /// Every add path goes through here so the badge always reflects the
    /// total regardless of which action triggered it.
    pub fn add_one(&mut self) -> StorefrontResult<u64> {
        let count = self.cart.add_one();
        let patch = DomPatch::new().set_text(&self.config.elements.cart_count, self.cart.display_text());
        self.apply_patch(patch)?;
        Ok(count)
    }

    /// Handles a click on an add-to-cart button.
    ///
    /// The button shows the acknowledgment label until the scheduled revert
    /// runs. A click during a pending revert keeps the label captured by the
    /// first click and restarts the delay.
    ///
    /// A `button_id` missing from the document leaves the cart untouched.
    pub fn add_to_cart(&mut self, button_id: &str) -> StorefrontResult<u64> {
        if !self.document.contains(button_id) {
            debug!(button = button_id, "add-to-cart button not in document, ignoring");
            return Ok(self.cart.count());
        }
        let name = self
            .document
            .attribute(button_id, "data-name")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.config.cart.default_item_name.clone());
        let price = parse_price_metadata(self.document.attribute(button_id, "data-price").as_deref());

        let count = self.add_one()?;

        let original_label = match self.scheduler.pending_for_element(button_id).map(|task| task.id) {
            Some(task_id) => self.scheduler.cancel(task_id).map(|task| match task.action {
                ScheduledAction::RevertLabel { label, .. } => label,
            }),
            None => self.document.text(button_id),
        };
        self.apply_patch(DomPatch::new().set_text(button_id, self.config.cart.added_label.clone()))?;
        if let Some(label) = original_label {
            let task_id = self.scheduler.schedule_after(
                Duration::from_millis(self.config.cart.revert_delay_ms),
                ScheduledAction::RevertLabel {
                    element_id: button_id.to_owned(),
                    label,
                },
            );
            debug!(button = button_id, task = task_id.0, "scheduled label revert");
        }

        info!(
            item = %name,
            price = %format_currency(&self.config.cart.currency_symbol, price),
            cart_count = count,
            "added to cart"
        );
        self.emit_signal(PageSignal::CartItemAdded {
            name,
            price,
            cart_count: count,
        });
        Ok(count)
    }
}
