use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ComputedTotal, parse_price_metadata};
use crate::document::{Document, DomPatch};
use crate::error::StorefrontResult;
use crate::extensions::PageSignal;
use crate::submission::OrderSummary;

use super::PageController;

/// Result of a builder form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderOutcome {
    Confirmed { summary: OrderSummary, cart_count: u64 },
    Failed { reason: String },
}

impl<D: Document> PageController<D> {
    fn set_builder_hidden(&mut self, hidden: bool) -> StorefrontResult<()> {
        let patch = DomPatch::new().set_attribute(
            &self.config.elements.builder_modal,
            "aria-hidden",
            if hidden { "true" } else { "false" },
        );
        self.apply_patch(patch)?;
        self.builder.open = !hidden;
        Ok(())
    }

    /// Reveals the builder dialog and immediately renders the total for the
    /// current selections.
    pub fn open_builder(&mut self) -> StorefrontResult<ComputedTotal> {
        self.set_builder_hidden(false)?;
        self.emit_signal(PageSignal::BuilderOpened);
        self.recompute_builder_total()
    }

    pub fn close_builder(&mut self) -> StorefrontResult<()> {
        self.set_builder_hidden(true)?;
        self.emit_signal(PageSignal::BuilderClosed);
        Ok(())
    }

    /// Backdrop click: closes only when the click landed on the dialog
    /// element itself, not on anything inside its content.
    pub fn builder_backdrop_click(&mut self, target_id: &str) -> StorefrontResult<bool> {
        if target_id != self.config.elements.builder_modal {
            return Ok(false);
        }
        self.close_builder()?;
        Ok(true)
    }

    /// Computes the total from the current selections without rendering it.
    #[must_use]
    pub fn quote_builder_total(&self) -> ComputedTotal {
        let ids = &self.config.elements;
        let size = self.document.selected_option(&ids.size_select);
        let crust = self.document.selected_option(&ids.crust_select);
        let topping_count = self
            .document
            .checkboxes_within(&ids.builder_form)
            .iter()
            .filter(|checkbox| checkbox.checked)
            .count();

        ComputedTotal::from_parts(
            self.builder
                .size_prices
                .price_of(size.as_ref().map(|option| option.value.as_str())),
            self.builder
                .crust_prices
                .price_of(crust.as_ref().map(|option| option.value.as_str())),
            topping_count,
            self.config.builder.topping_unit_price,
        )
    }

    /// Recomputes the total and writes both the formatted text and the raw
    /// `data-price` value from that single computation.
    pub fn recompute_builder_total(&mut self) -> StorefrontResult<ComputedTotal> {
        let total = self.quote_builder_total();
        let total_id = &self.config.elements.builder_total;
        let patch = DomPatch::new()
            .set_text(total_id, total.display_text(&self.config.builder.currency_symbol))
            .set_attribute(total_id, "data-price", total.attribute_value());
        self.apply_patch(patch)?;
        self.builder.last_total = Some(total);
        debug!(total = %total.value(), "builder total recomputed");
        self.emit_signal(PageSignal::BuilderTotalRecomputed {
            total: total.value(),
        });
        Ok(total)
    }

    /// Collects the current selections and the price last shown to the user.
    ///
    /// The price is read back from the total element, never recomputed, so a
    /// selection changed without a change event does not alter it.
    #[must_use]
    pub fn collect_order(&self) -> OrderSummary {
        let ids = &self.config.elements;
        let selected_value = |select_id: &str| {
            self.document
                .selected_option(select_id)
                .map(|option| option.value)
        };
        OrderSummary {
            size: selected_value(&ids.size_select),
            crust: selected_value(&ids.crust_select),
            toppings: self
                .document
                .checkboxes_within(&ids.builder_form)
                .into_iter()
                .filter(|checkbox| checkbox.checked)
                .map(|checkbox| checkbox.value)
                .collect(),
            price: parse_price_metadata(
                self.document
                    .attribute(&ids.builder_total, "data-price")
                    .as_deref(),
            ),
        }
    }

    /// Handles builder form submission.
    ///
    /// On success the cart grows by one, the dialog closes, and the user gets
    /// a confirmation prompt. On backend failure nothing is added and the
    /// dialog stays open behind a failure prompt.
    pub fn confirm_order(&mut self) -> StorefrontResult<OrderOutcome> {
        let summary = self.collect_order();

        if let Err(err) = self.backend.place_order(&summary) {
            warn!(error = %err, "order placement failed");
            let reason = err.to_string();
            self.apply_patch(
                DomPatch::new().alert(self.config.builder.order_failure_message.clone()),
            )?;
            self.emit_signal(PageSignal::OrderFailed {
                reason: reason.clone(),
            });
            return Ok(OrderOutcome::Failed { reason });
        }

        let cart_count = self.add_one()?;
        self.close_builder()?;
        let message = summary.confirmation_message(
            &self.config.builder.product_name,
            &self.config.builder.currency_symbol,
        );
        self.apply_patch(DomPatch::new().alert(message))?;
        self.emit_signal(PageSignal::OrderConfirmed {
            summary: summary.clone(),
            cart_count,
        });
        Ok(OrderOutcome::Confirmed {
            summary,
            cart_count,
        })
    }
}
