//! Outbound submission seam for newsletter sign-ups and builder orders.
//!
//! The default `SimulatedBackend` accepts everything locally. Hosts that talk
//! to a real service implement `SubmissionBackend` and get a third, failure
//! outcome rendered by the controllers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::format_currency;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission backend unavailable: {0}")]
    Unavailable(String),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Order collected from the builder form at confirm time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub size: Option<String>,
    pub crust: Option<String>,
    pub toppings: Vec<String>,
    /// Price read back from the total display, not recomputed.
    pub price: Decimal,
}

impl OrderSummary {
    /// `custom pizza (Large, Thin, Olives)`; absent selections are skipped.
    #[must_use]
    pub fn description(&self, product_name: &str) -> String {
        let parts: Vec<&str> = self
            .size
            .iter()
            .chain(self.crust.iter())
            .chain(self.toppings.iter())
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            return product_name.to_owned();
        }
        format!("{product_name} ({})", parts.join(", "))
    }

    #[must_use]
    pub fn confirmation_message(&self, product_name: &str, currency_symbol: &str) -> String {
        format!(
            "Added {} — {}",
            self.description(product_name),
            format_currency(currency_symbol, self.price)
        )
    }
}

pub trait SubmissionBackend {
    fn subscribe(&mut self, email: &str) -> Result<(), SubmissionError>;
    fn place_order(&mut self, order: &OrderSummary) -> Result<(), SubmissionError>;
}

/// Local-only backend that records requests and always succeeds.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    subscriptions: Vec<String>,
    orders: Vec<OrderSummary>,
}

impl SimulatedBackend {
    #[must_use]
    pub fn subscriptions(&self) -> &[String] {
        &self.subscriptions
    }

    #[must_use]
    pub fn orders(&self) -> &[OrderSummary] {
        &self.orders
    }
}

impl SubmissionBackend for SimulatedBackend {
    fn subscribe(&mut self, email: &str) -> Result<(), SubmissionError> {
        self.subscriptions.push(email.to_owned());
        Ok(())
    }

    fn place_order(&mut self, order: &OrderSummary) -> Result<(), SubmissionError> {
        self.orders.push(order.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(toppings: &[&str]) -> OrderSummary {
        OrderSummary {
            size: Some("Large".to_owned()),
            crust: Some("Thin".to_owned()),
            toppings: toppings.iter().map(|t| (*t).to_owned()).collect(),
            price: Decimal::new(1297, 2),
        }
    }

    #[test]
    fn confirmation_message_lists_toppings_only_when_present() {
        assert_eq!(
            order(&["Olives", "Basil"]).confirmation_message("custom pizza", "$"),
            "Added custom pizza (Large, Thin, Olives, Basil) — $12.97"
        );
        assert_eq!(
            order(&[]).confirmation_message("custom pizza", "$"),
            "Added custom pizza (Large, Thin) — $12.97"
        );
    }

    #[test]
    fn description_skips_missing_selections() {
        let summary = OrderSummary {
            size: None,
            crust: None,
            toppings: Vec::new(),
            price: Decimal::ZERO,
        };
        assert_eq!(summary.description("custom pizza"), "custom pizza");
    }
}
