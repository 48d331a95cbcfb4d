use std::time::Duration;

use crate::core::{CartCounter, ComputedTotal, NavState, PriceTable};
use crate::document::{Document, DomPatch};
use crate::error::StorefrontResult;
use crate::extensions::PagePlugin;
use crate::interaction::{BindingTable, TaskScheduler};
use crate::submission::SubmissionBackend;

use super::PageControllerConfig;

/// Builder dialog state owned by the controller.
pub(super) struct BuilderState {
    pub(super) open: bool,
    pub(super) size_prices: PriceTable,
    pub(super) crust_prices: PriceTable,
    pub(super) last_total: Option<ComputedTotal>,
}

/// Main orchestration facade consumed by host pages.
///
/// `PageController` owns the navigation flag, the cart counter, builder
/// pricing, the handler binding table, and the label-revert scheduler. All
/// page effects go through the `Document` it wraps.
pub struct PageController<D: Document> {
    pub(super) document: D,
    pub(super) config: PageControllerConfig,
    pub(super) nav: NavState,
    pub(super) cart: CartCounter,
    pub(super) builder: BuilderState,
    pub(super) bindings: BindingTable,
    pub(super) scheduler: TaskScheduler,
    pub(super) plugins: Vec<Box<dyn PagePlugin>>,
    pub(super) backend: Box<dyn SubmissionBackend>,
}

impl<D: Document> PageController<D> {
    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Direct document access for hosts that mutate the page outside of
    /// events (typing, ticking boxes, removing nodes).
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub fn into_document(self) -> D {
        self.document
    }

    #[must_use]
    pub fn config(&self) -> &PageControllerConfig {
        &self.config
    }

    #[must_use]
    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    #[must_use]
    pub fn is_nav_open(&self) -> bool {
        self.nav.is_open()
    }

    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    #[must_use]
    pub fn is_builder_open(&self) -> bool {
        self.builder.open
    }

    /// Last total rendered into the builder display, if any.
    #[must_use]
    pub fn last_builder_total(&self) -> Option<ComputedTotal> {
        self.builder.last_total
    }

    #[must_use]
    pub fn size_prices(&self) -> &PriceTable {
        &self.builder.size_prices
    }

    #[must_use]
    pub fn crust_prices(&self) -> &PriceTable {
        &self.builder.crust_prices
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    #[must_use]
    pub fn pending_task_count(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Swaps the outbound backend used by newsletter and order submission.
    pub fn set_submission_backend(&mut self, backend: Box<dyn SubmissionBackend>) {
        self.backend = backend;
    }

    pub(super) fn apply_patch(&mut self, patch: DomPatch) -> StorefrontResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        self.document.apply(&patch)
    }
}
