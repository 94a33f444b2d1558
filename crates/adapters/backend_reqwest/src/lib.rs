//! # periscope-adapter-backend-reqwest
//!
//! HTTP adapter implementing the [`Backend`] port over `reqwest`.
//!
//! Response interpretation is uniform across all four endpoints:
//! a non-2xx status fails with `Transport` (the message carries the
//! numeric code); a 2xx body whose payload has a truthy `error` field
//! fails with `Application` using that field's value, without examining
//! any further fields; otherwise the body decodes into the endpoint's
//! typed payload.

use periscope_app::ports::Backend;
use periscope_domain::detection::DetectionOutcome;
use periscope_domain::error::PeriscopeError;
use periscope_domain::status::DeviceStatus;
use serde::Serialize;
use serde_json::Value;

/// [`Backend`] implementation talking to a remote node over HTTP.
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestBackend {
    /// Create a backend for the given base URL (e.g. `http://host:5000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json(&self, path: &str) -> Result<Value, PeriscopeError> {
        tracing::debug!(path, "dispatching GET");
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(connection)?;
        interpret(response).await
    }

    async fn post_json(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<Value, PeriscopeError> {
        tracing::debug!(path, "dispatching POST");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(connection)?;
        interpret(response).await
    }
}

impl Backend for ReqwestBackend {
    async fn connectivity_test(&self) -> Result<Value, PeriscopeError> {
        self.get_json("/test").await
    }

    async fn visual_detection(&self, image: &str) -> Result<DetectionOutcome, PeriscopeError> {
        #[derive(Serialize)]
        struct DetectionRequest<'a> {
            image: &'a str,
        }

        let value = self
            .post_json("/visual_detection", &DetectionRequest { image })
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn device_status(&self) -> Result<DeviceStatus, PeriscopeError> {
        let value = self.get_json("/device_status").await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn osint_lookup(&self, target: &str) -> Result<Value, PeriscopeError> {
        #[derive(Serialize)]
        struct OsintRequest<'a> {
            target: &'a str,
        }

        self.post_json("/osint", &OsintRequest { target }).await
    }
}

/// Check the status, then the payload's `error` field, then hand the
/// decoded body back.
async fn interpret(response: reqwest::Response) -> Result<Value, PeriscopeError> {
    let status = response.status();
    if !status.is_success() {
        return Err(PeriscopeError::Transport {
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(connection)?;
    let value: Value = serde_json::from_slice(&bytes)?;

    if let Some(message) = error_message(&value) {
        return Err(PeriscopeError::Application(message));
    }
    Ok(value)
}

/// A truthy `error` field marks the payload as a failure regardless of
/// the HTTP status. `null`, `false`, and the empty string are not
/// failures; non-string values are stringified as the message.
fn error_message(value: &Value) -> Option<String> {
    match value.get("error") {
        None | Some(Value::Null | Value::Bool(false)) => None,
        Some(Value::String(message)) if message.is_empty() => None,
        Some(Value::String(message)) => Some(message.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn connection(err: reqwest::Error) -> PeriscopeError {
    PeriscopeError::Connection(err.to_string())
}
