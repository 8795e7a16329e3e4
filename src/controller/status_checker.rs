use std::sync::Arc;

use crate::http::{GET_OBJECT_ID_PATH, HttpClient, RequestBody};
use crate::page::{ElementId, Page};
use crate::types::ObjectIdResult;

use super::task_submitter::TASK_NAME_KEY;

pub const RETRIEVING_MESSAGE: &str = "Retrieving object ID...";
pub const RETRIEVE_FAILED_MESSAGE: &str = "Error: Failed to retrieve object ID";

pub struct StatusChecker {
    page: Page,
    http: Arc<dyn HttpClient>,
}

impl StatusChecker {
    pub fn new(page: Page, http: Arc<dyn HttpClient>) -> Self {
        Self { page, http }
    }

    pub async fn check(&self) {
        let task_name = self.page.update(|state| {
            state.element_mut(ElementId::ObjectIdResult).show();
            state.set_text(ElementId::ObjectIdMessage, RETRIEVING_MESSAGE);
            state
                .element(ElementId::CheckStatusButton)
                .dataset
                .get(TASK_NAME_KEY)
                .cloned()
                .unwrap_or_default()
        });

        let body = RequestBody::form(&[("taskName", task_name.as_str())]);
        let result = match self.http.post(GET_OBJECT_ID_PATH, body).await {
            Ok(response) => response.json::<ObjectIdResult>(),
            Err(err) => Err(err),
        };

        let message = match result {
            Ok(data) => data.message,
            Err(err) => {
                tracing::error!(%task_name, "object id lookup failed: {err}");
                RETRIEVE_FAILED_MESSAGE.to_string()
            }
        };
        self.page
            .update(|state| state.set_text(ElementId::ObjectIdMessage, message));
    }
}
