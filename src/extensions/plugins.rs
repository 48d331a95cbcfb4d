use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::NewsletterOutcome;
use crate::submission::OrderSummary;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub nav_open: bool,
    pub cart_count: u64,
    pub builder_open: bool,
    pub builder_total: Option<Decimal>,
    pub pending_tasks: usize,
}

/// Signal stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSignal {
    NavToggled {
        open: bool,
    },
    AnchorScrolled {
        target_id: String,
    },
    CartItemAdded {
        name: String,
        price: Decimal,
        cart_count: u64,
    },
    LabelReverted {
        element_id: String,
    },
    NewsletterSubmitted {
        outcome: NewsletterOutcome,
    },
    BuilderOpened,
    BuilderClosed,
    BuilderTotalRecomputed {
        total: Decimal,
    },
    OrderConfirmed {
        summary: OrderSummary,
        cart_count: u64,
    },
    OrderFailed {
        reason: String,
    },
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe signals and read controller context without mutating
/// page state directly.
pub trait PagePlugin {
    fn id(&self) -> &str;
    fn on_signal(&mut self, signal: &PageSignal, context: PageContext);
}
