use tracing::debug;

use crate::document::{Document, DomPatch, ScrollBehavior, ScrollBlock};
use crate::error::StorefrontResult;
use crate::extensions::PageSignal;

use super::PageController;

impl<D: Document> PageController<D> {
    fn nav_patch(&self, open: bool) -> DomPatch {
        let nav_id = &self.config.elements.nav;
        let display = open.then(|| self.config.nav.open_display.clone());
        DomPatch::new()
            .set_class(nav_id, &self.config.nav.open_class, open)
            .set_style(nav_id, "display", display)
    }

    /// Flips the mobile navigation panel and returns the new open state.
    pub fn toggle_nav(&mut self) -> StorefrontResult<bool> {
        let open = self.nav.toggle();
        self.apply_patch(self.nav_patch(open))?;
        self.emit_signal(PageSignal::NavToggled { open });
        Ok(open)
    }

    /// Closes the panel if it is open. Returns `true` when it was open.
    pub fn close_nav(&mut self) -> StorefrontResult<bool> {
        if !self.nav.close() {
            return Ok(false);
        }
        self.apply_patch(self.nav_patch(false))?;
        self.emit_signal(PageSignal::NavToggled { open: false });
        Ok(true)
    }

    /// Smooth-scrolls to the element named by an in-page `href` such as `#menu`.
    ///
    /// Returns `true` when the target exists and default navigation should be
    /// suppressed. Unknown targets leave everything to the browser.
    pub fn scroll_to_fragment(&mut self, href: &str) -> StorefrontResult<bool> {
        let Some(target_id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return Ok(false);
        };
        if !self.document.contains(target_id) {
            debug!(href, "anchor target not found, leaving default navigation");
            return Ok(false);
        }

        self.apply_patch(DomPatch::new().scroll_into_view(
            target_id,
            ScrollBehavior::Smooth,
            ScrollBlock::Start,
        ))?;
        self.close_nav()?;
        self.emit_signal(PageSignal::AnchorScrolled {
            target_id: target_id.to_owned(),
        });
        Ok(true)
    }
}
