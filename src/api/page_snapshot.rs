use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::document::Document;

use super::PageController;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub nav_open: bool,
    pub cart_count: u64,
    pub builder_open: bool,
    pub builder_total: Option<Decimal>,
    pub pending_tasks: usize,
    pub clock_ms: u64,
    pub binding_count: usize,
    pub plugin_ids: Vec<String>,
}

impl<D: Document> PageController<D> {
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            nav_open: self.nav.is_open(),
            cart_count: self.cart.count(),
            builder_open: self.builder.open,
            builder_total: self.builder.last_total.map(|total| total.value()),
            pending_tasks: self.scheduler.pending_count(),
            clock_ms: u64::try_from(self.scheduler.now().as_millis()).unwrap_or(u64::MAX),
            binding_count: self.bindings.len(),
            plugin_ids: self
                .plugins
                .iter()
                .map(|plugin| plugin.id().to_owned())
                .collect(),
        }
    }
}
