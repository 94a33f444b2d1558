//! Backend port — the HTTP contract consumed from the remote node.
//!
//! Implementations issue exactly one request per call. There are no
//! retries, timeouts, or cancellation; a failed call surfaces as a
//! [`PeriscopeError`] and the invocation ends there.

use std::future::Future;

use periscope_domain::detection::DetectionOutcome;
use periscope_domain::error::PeriscopeError;
use periscope_domain::status::DeviceStatus;
use serde_json::Value;

/// The four operations exposed by the remote node.
pub trait Backend {
    /// `GET /test` — connectivity probe; the payload has no fixed shape.
    fn connectivity_test(&self) -> impl Future<Output = Result<Value, PeriscopeError>> + Send;

    /// `POST /visual_detection` with `{"image": <base64 data URL>}`.
    fn visual_detection(
        &self,
        image: &str,
    ) -> impl Future<Output = Result<DetectionOutcome, PeriscopeError>> + Send;

    /// `GET /device_status`.
    fn device_status(&self) -> impl Future<Output = Result<DeviceStatus, PeriscopeError>> + Send;

    /// `POST /osint` with `{"target": <target>}` — the payload has no
    /// fixed shape.
    fn osint_lookup(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<Value, PeriscopeError>> + Send;
}
