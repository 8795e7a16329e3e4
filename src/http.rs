//! HTTP seam between the page controller and the task desk server.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub const SUBMIT_TASK_PATH: &str = "/submit_task";
pub const GET_OBJECT_ID_PATH: &str = "/get_object_id";
pub const REWRITE_DESCRIPTION_PATH: &str = "/rewrite_description";

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    /// `multipart/form-data`, text parts only
    Multipart(Vec<(String, String)>),
}

impl RequestBody {
    pub fn form(fields: &[(&str, &str)]) -> Self {
        RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn fields(&self) -> &[(String, String)] {
        match self {
            RequestBody::Form(fields) | RequestBody::Multipart(fields) => fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(HttpError::from)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// No response was received.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Body of a non-2xx response, if one was received.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            HttpError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        HttpError::Transport(err.to_string())
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post(&self, path: &str, body: RequestBody) -> Result<HttpResponse, HttpError>;
}

/// `HttpClient` backed by reqwest, posting to paths under a base URL.
pub struct ReqwestClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post(&self, path: &str, body: RequestBody) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(path);
        tracing::debug!(%url, "posting request");

        let request = self.client.post(&url);
        let request = match body {
            RequestBody::Form(fields) => request.form(&fields),
            RequestBody::Multipart(fields) => {
                let form = fields
                    .into_iter()
                    .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                        form.text(name, value)
                    });
                request.multipart(form)
            }
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
