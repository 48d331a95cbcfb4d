use crate::document::Document;
use crate::extensions::{PageContext, PageSignal};

use super::PageController;

impl<D: Document> PageController<D> {
    pub(super) fn page_context(&self) -> PageContext {
        PageContext {
            nav_open: self.nav.is_open(),
            cart_count: self.cart.count(),
            builder_open: self.builder.open,
            builder_total: self.builder.last_total.map(|total| total.value()),
            pending_tasks: self.scheduler.pending_count(),
        }
    }

    pub(super) fn emit_signal(&mut self, signal: PageSignal) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.page_context();
        for plugin in &mut self.plugins {
            plugin.on_signal(&signal, context);
        }
    }
}
