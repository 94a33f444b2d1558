//! Visual detection — the payload returned by the detection endpoint.

use serde::Deserialize;

/// Result of running detection on an uploaded image.
///
/// `detections` has no schema enforced client-side; it is rendered as a
/// pretty-printed dump.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionOutcome {
    /// The annotated image, base64-encoded JPEG (no data-URL prefix).
    pub processed_image: String,
    /// Detection list as returned by the backend.
    pub detections: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_detection_payload() {
        let outcome: DetectionOutcome = serde_json::from_value(serde_json::json!({
            "success": true,
            "processed_image": "aGVsbG8=",
            "detections": [{ "confidence": 0.92 }]
        }))
        .unwrap();

        assert_eq!(outcome.processed_image, "aGVsbG8=");
        assert_eq!(outcome.detections[0]["confidence"], 0.92);
    }
}
