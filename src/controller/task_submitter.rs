use std::sync::Arc;

use crate::http::{HttpClient, HttpError, RequestBody, SUBMIT_TASK_PATH};
use crate::page::{ElementId, Page};
use crate::types::{ErrorBody, TaskForm, TaskSubmissionResult};

pub const SUBMITTING_MESSAGE: &str = "Submitting task...";
pub const SUBMIT_FAILED_MESSAGE: &str = "Error: Failed to submit task";
pub const NO_LOG_MESSAGE: &str = "No log available";

/// Dataset key on the check-status button holding the submitted task name.
pub const TASK_NAME_KEY: &str = "taskName";

pub struct TaskSubmitter {
    page: Page,
    http: Arc<dyn HttpClient>,
}

impl TaskSubmitter {
    pub fn new(page: Page, http: Arc<dyn HttpClient>) -> Self {
        Self { page, http }
    }

    pub async fn submit(&self, form: &TaskForm) {
        self.page.update(|state| {
            state.element_mut(ElementId::StatusWindow).show();
            state.set_text(ElementId::StatusMessage, SUBMITTING_MESSAGE);
            state.set_text(ElementId::LogContent, "");
            state.element_mut(ElementId::CheckStatusContainer).hide();
            state.element_mut(ElementId::ObjectIdResult).hide();
        });

        let body = RequestBody::Multipart(form.fields());
        let result = match self.http.post(SUBMIT_TASK_PATH, body).await {
            Ok(response) => response.json::<TaskSubmissionResult>(),
            Err(err) => Err(err),
        };

        match result {
            Ok(data) => self.render_success(data),
            Err(err) => self.render_failure(&err),
        }
    }

    fn render_success(&self, data: TaskSubmissionResult) {
        tracing::debug!(status = %data.status, task_id = ?data.task_id, "task submitted");
        self.page.update(|state| {
            let mut message = format!("{}: {}", data.status, data.message);
            if let Some(task_id) = data.task_id.as_deref().filter(|id| !id.is_empty()) {
                message.push_str(&format!(" Task ID: {task_id}"));
                // The check control is only usable with a task name to look up.
                if let Some(task_name) = data.task_name.clone().filter(|name| !name.is_empty()) {
                    state
                        .element_mut(ElementId::CheckStatusButton)
                        .dataset
                        .insert(TASK_NAME_KEY.to_string(), task_name);
                    state.element_mut(ElementId::CheckStatusContainer).show();
                }
            }
            state.set_text(ElementId::StatusMessage, message);
            state.set_text(ElementId::LogContent, data.log);
        });
    }

    fn render_failure(&self, err: &HttpError) {
        tracing::error!("task submission failed: {err}");
        let log = err
            .response_body()
            .and_then(ErrorBody::parse)
            .and_then(|body| body.log)
            .filter(|log| !log.is_empty())
            .unwrap_or_else(|| NO_LOG_MESSAGE.to_string());
        self.page.update(|state| {
            state.set_text(ElementId::StatusMessage, SUBMIT_FAILED_MESSAGE);
            state.set_text(ElementId::LogContent, log);
        });
    }
}
