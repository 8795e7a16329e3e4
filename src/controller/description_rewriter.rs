use std::sync::Arc;

use crate::http::{HttpClient, HttpError, REWRITE_DESCRIPTION_PATH, RequestBody};
use crate::page::{ElementId, Page};
use crate::types::{ErrorBody, NotificationKind, RewriteResult};

use super::notification::NotificationPresenter;

pub const EMPTY_DESCRIPTION_MESSAGE: &str = "Please enter a description before rewriting.";
pub const REWRITE_SUCCESS_MESSAGE: &str = "Description rewritten successfully!";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

const ARIA_BUSY: &str = "aria-busy";

#[derive(Clone, Debug, PartialEq)]
pub enum RewriteOutcome {
    /// Nothing to rewrite; no request was made.
    Empty,
    /// A rewrite is already in flight; no request was made.
    Busy,
    Rewritten,
    Rejected(String),
    Failed(String),
}

pub struct DescriptionRewriter {
    page: Page,
    http: Arc<dyn HttpClient>,
    notifications: Arc<NotificationPresenter>,
}

impl DescriptionRewriter {
    pub fn new(
        page: Page,
        http: Arc<dyn HttpClient>,
        notifications: Arc<NotificationPresenter>,
    ) -> Self {
        Self {
            page,
            http,
            notifications,
        }
    }

    pub async fn rewrite(&self) -> RewriteOutcome {
        let original = self.page.read(|state| {
            state
                .element(ElementId::Description)
                .value
                .trim()
                .to_string()
        });

        if original.is_empty() {
            self.notifications
                .show(EMPTY_DESCRIPTION_MESSAGE, NotificationKind::Error);
            return RewriteOutcome::Empty;
        }

        let Some(_busy) = BusyGuard::engage(&self.page) else {
            tracing::debug!("rewrite already in flight, ignoring click");
            return RewriteOutcome::Busy;
        };

        let body = RequestBody::form(&[("description", original.as_str())]);
        let result = match self.http.post(REWRITE_DESCRIPTION_PATH, body).await {
            Ok(response) => response.json::<RewriteResult>(),
            Err(err) => Err(err),
        };

        match result {
            Ok(data) if data.is_success() => {
                let rewritten = data.rewritten_description.unwrap_or_default();
                self.page.update(|state| {
                    state.element_mut(ElementId::Description).value = rewritten;
                });
                self.notifications
                    .show(REWRITE_SUCCESS_MESSAGE, NotificationKind::Success);
                RewriteOutcome::Rewritten
            }
            Ok(data) => {
                let message = data
                    .message
                    .filter(|message| !message.is_empty())
                    .map(|message| format!("Error: {message}"))
                    .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string());
                self.notifications.show(&message, NotificationKind::Error);
                RewriteOutcome::Rejected(message)
            }
            Err(err) => {
                tracing::error!("description rewrite failed: {err}");
                let message = failure_message(&err);
                self.notifications.show(&message, NotificationKind::Error);
                RewriteOutcome::Failed(message)
            }
        }
    }
}

fn failure_message(err: &HttpError) -> String {
    err.response_body()
        .and_then(ErrorBody::parse)
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .map(|message| format!("Error: {message}"))
        .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string())
}

/// Marks the rewrite button busy and disabled until dropped.
struct BusyGuard<'a> {
    page: &'a Page,
}

impl<'a> BusyGuard<'a> {
    /// Returns `None` when the button is already disabled. The check and the
    /// claim happen under one page lock.
    fn engage(page: &'a Page) -> Option<Self> {
        let claimed = page.update(|state| {
            let button = state.element_mut(ElementId::RewriteBtn);
            if button.disabled {
                return false;
            }
            button
                .attributes
                .insert(ARIA_BUSY.to_string(), "true".to_string());
            button.disabled = true;
            true
        });
        claimed.then_some(Self { page })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.page.update(|state| {
            let button = state.element_mut(ElementId::RewriteBtn);
            button.attributes.remove(ARIA_BUSY);
            button.disabled = false;
        });
    }
}
