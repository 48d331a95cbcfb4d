use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{trim_form_value, validate_email};
use crate::document::{Document, DomPatch};
use crate::error::StorefrontResult;
use crate::extensions::PageSignal;

use super::PageController;

/// Display outcome of one newsletter submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsletterOutcome {
    /// Shape check failed; the field is left as typed.
    Invalid,
    Subscribed,
    /// Backend refused or was unreachable; the field is kept for a retry.
    Failed,
}

impl<D: Document> PageController<D> {
    fn newsletter_message_patch(&self, message: &str, color: &str) -> DomPatch {
        let message_id = &self.config.elements.newsletter_message;
        DomPatch::new()
            .set_text(message_id, message)
            .set_style(message_id, "color", Some(color.to_owned()))
    }

    /// Validates the email field and reports the result in the message area.
    ///
    /// Default form submission is always suppressed by the caller.
    pub fn submit_newsletter(&mut self) -> StorefrontResult<NewsletterOutcome> {
        let raw = self
            .document
            .value(&self.config.elements.newsletter_email)
            .unwrap_or_default();
        let email = trim_form_value(&raw);
        let newsletter = &self.config.newsletter;

        let (outcome, patch) = if !validate_email(email) {
            (
                NewsletterOutcome::Invalid,
                self.newsletter_message_patch(&newsletter.invalid_message, &newsletter.error_color),
            )
        } else {
            match self.backend.subscribe(email) {
                Ok(()) => (
                    NewsletterOutcome::Subscribed,
                    self.newsletter_message_patch(
                        &newsletter.success_message,
                        &newsletter.success_color,
                    )
                    .set_value(&self.config.elements.newsletter_email, ""),
                ),
                Err(err) => {
                    warn!(error = %err, "newsletter subscription failed");
                    (
                        NewsletterOutcome::Failed,
                        self.newsletter_message_patch(
                            &newsletter.failure_message,
                            &newsletter.error_color,
                        ),
                    )
                }
            }
        };

        self.apply_patch(patch)?;
        self.emit_signal(PageSignal::NewsletterSubmitted { outcome });
        Ok(outcome)
    }
}
