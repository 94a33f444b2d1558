//! Dashboard handlers — the four user-triggered actions.
//!
//! Every handler follows the same contract: validate local input (failing
//! immediately, without a network call), write an in-progress indicator,
//! issue exactly one request through the [`Backend`] port, then render
//! either the success view or `"Error: " + message`. Errors are terminal
//! for the invocation — they are rendered here and never escalate past
//! the output region; the returned `Result` only reports the outcome so
//! a caller can set an exit code.

use std::path::Path;

use periscope_domain::error::{PeriscopeError, ValidationError};
use periscope_domain::{image, report};
use serde_json::Value;

use crate::ports::{Backend, ImageRegion, OutputRegion};

/// Drives the dashboard actions against an injected backend.
pub struct Dashboard<B> {
    backend: B,
}

impl<B: Backend> Dashboard<B> {
    /// Create a dashboard backed by the given port implementation.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Probe the backend and render its reply as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// The returned error has already been rendered into `region`; it is
    /// handed back only so the caller can observe the outcome.
    #[tracing::instrument(skip_all)]
    pub async fn connectivity_test(
        &self,
        region: &mut impl OutputRegion,
    ) -> Result<(), PeriscopeError> {
        region.show_progress("Testing API connection...");
        match self.backend.connectivity_test().await {
            Ok(payload) => {
                region.show_success(&pretty(&payload));
                Ok(())
            }
            Err(err) => Err(fail(region, err)),
        }
    }

    /// Upload an image for detection, then render the annotated image
    /// into `image_region` and the detection list into `region`.
    ///
    /// # Errors
    ///
    /// Fails without a network call when no image is given or its format
    /// is unsupported. All errors are rendered into `region` before being
    /// returned.
    #[tracing::instrument(skip_all, fields(image = ?image))]
    pub async fn visual_detection(
        &self,
        region: &mut impl OutputRegion,
        image_region: &mut impl ImageRegion,
        image: Option<&Path>,
    ) -> Result<(), PeriscopeError> {
        let Some(path) = image else {
            return Err(fail(region, ValidationError::MissingImage.into()));
        };

        region.show_progress("Processing...");
        image_region.hide();

        match self.detect(path, image_region).await {
            Ok(detections) => {
                region.show_success(&pretty(&detections));
                Ok(())
            }
            Err(err) => {
                image_region.hide();
                Err(fail(region, err))
            }
        }
    }

    /// Fetch the device status and render the sectioned report.
    ///
    /// # Errors
    ///
    /// The returned error has already been rendered into `region`.
    #[tracing::instrument(skip_all)]
    pub async fn device_status(
        &self,
        region: &mut impl OutputRegion,
    ) -> Result<(), PeriscopeError> {
        region.show_progress("Checking device status...");
        match self.backend.device_status().await {
            Ok(status) => {
                region.show_success(&report::render(&status));
                Ok(())
            }
            Err(err) => Err(fail(region, err)),
        }
    }

    /// Look up a target domain and render the findings as pretty-printed
    /// JSON. The target is trimmed; a blank target fails validation.
    ///
    /// # Errors
    ///
    /// Fails without a network call when the trimmed target is empty.
    /// All errors are rendered into `region` before being returned.
    #[tracing::instrument(skip_all, fields(lookup_target = %target))]
    pub async fn osint_lookup(
        &self,
        region: &mut impl OutputRegion,
        target: &str,
    ) -> Result<(), PeriscopeError> {
        let target = target.trim();
        if target.is_empty() {
            return Err(fail(region, ValidationError::EmptyTarget.into()));
        }

        region.show_progress("Analyzing...");
        match self.backend.osint_lookup(target).await {
            Ok(payload) => {
                region.show_success(&pretty(&payload));
                Ok(())
            }
            Err(err) => Err(fail(region, err)),
        }
    }

    async fn detect(
        &self,
        path: &Path,
        image_region: &mut impl ImageRegion,
    ) -> Result<Value, PeriscopeError> {
        let data_url = encode_image(path).await?;
        let outcome = self.backend.visual_detection(&data_url).await?;
        image_region.show(&outcome.processed_image)?;
        Ok(outcome.detections)
    }
}

/// Read an image file and encode it as a base64 data URL.
async fn encode_image(path: &Path) -> Result<String, PeriscopeError> {
    let mime = image::mime_for_path(path)?;
    let bytes = tokio::fs::read(path).await?;
    Ok(image::to_data_url(mime, &bytes))
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render a failure into the region and hand the error back so the
/// caller can observe the outcome.
fn fail(region: &mut impl OutputRegion, err: PeriscopeError) -> PeriscopeError {
    tracing::warn!(error = %err, "dashboard action failed");
    region.show_error(&format!("Error: {err}"));
    err
}
