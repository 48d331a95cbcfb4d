use smallvec::SmallVec;
use tracing::debug;

use crate::document::Document;
use crate::error::StorefrontResult;
use crate::interaction::{EventOutcome, HandlerContext, HandlerId, PageEvent};

use super::PageController;

type PropagationPath = SmallVec<[String; 8]>;

impl<D: Document> PageController<D> {
    /// Target first, then each ancestor up to the root.
    fn propagation_path(&self, target: &str) -> PropagationPath {
        let mut path = PropagationPath::new();
        let mut current = Some(target.to_owned());
        while let Some(id) = current {
            if path.contains(&id) {
                break;
            }
            current = self.document.parent_of(&id);
            path.push(id);
        }
        path
    }

    /// Delivers one user event through the bound handlers.
    ///
    /// The event bubbles from its target through every ancestor; at each node
    /// matching handlers run in registration order.
    pub fn dispatch(&mut self, event: &PageEvent) -> StorefrontResult<EventOutcome> {
        let mut outcome = EventOutcome::default();
        if !self.document.contains(&event.target) {
            debug!(target_id = %event.target, "event target not in document, ignoring");
            return Ok(outcome);
        }

        for node in self.propagation_path(&event.target) {
            let handlers: SmallVec<[HandlerId; 4]> = self
                .bindings
                .matching(event.kind, &node, &self.document)
                .collect();
            for handler in handlers {
                let context = HandlerContext {
                    target: event.target.clone(),
                    current_target: node.clone(),
                };
                outcome.default_prevented |= self.invoke_handler(handler, &context)?;
                outcome.handlers_invoked += 1;
            }
        }
        debug!(
            kind = ?event.kind,
            target_id = %event.target,
            handlers = outcome.handlers_invoked,
            default_prevented = outcome.default_prevented,
            "event dispatched"
        );
        Ok(outcome)
    }

    /// Runs one named handler; returns whether default behavior is suppressed.
    fn invoke_handler(
        &mut self,
        handler: HandlerId,
        context: &HandlerContext,
    ) -> StorefrontResult<bool> {
        match handler {
            HandlerId::ToggleNav => {
                self.toggle_nav()?;
                Ok(false)
            }
            HandlerId::ScrollToAnchor => {
                let href = self
                    .document
                    .attribute(&context.current_target, "href")
                    .unwrap_or_default();
                self.scroll_to_fragment(&href)
            }
            HandlerId::AddToCart => {
                self.add_to_cart(&context.current_target)?;
                Ok(false)
            }
            HandlerId::SubmitNewsletter => {
                self.submit_newsletter()?;
                Ok(true)
            }
            HandlerId::OpenBuilder => {
                self.open_builder()?;
                Ok(false)
            }
            HandlerId::CloseBuilder => {
                self.close_builder()?;
                Ok(false)
            }
            HandlerId::BuilderBackdropClick => {
                if context.is_direct() {
                    self.builder_backdrop_click(&context.target)?;
                }
                Ok(false)
            }
            HandlerId::RecomputeBuilderTotal => {
                self.recompute_builder_total()?;
                Ok(false)
            }
            HandlerId::ConfirmOrder => {
                self.confirm_order()?;
                Ok(true)
            }
        }
    }
}
