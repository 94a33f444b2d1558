//! Common error types used across the workspace.
//!
//! Every variant renders a user-facing message through `Display`; the
//! handlers in `periscope-app` prefix it with `"Error: "` before writing
//! it to an output region. Errors are terminal for a single invocation —
//! nothing here is retried or escalated.

/// A required local input was absent or empty. No request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No image file was provided to the visual-detection handler.
    #[error("Please select an image file")]
    MissingImage,
    /// The OSINT target was empty after trimming whitespace.
    #[error("Please enter a target domain")]
    EmptyTarget,
}

/// Top-level error for one dashboard invocation.
#[derive(Debug, thiserror::Error)]
pub enum PeriscopeError {
    /// Missing or empty local input; fails before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Transport { status: u16 },

    /// A 2xx response whose payload carried a truthy `error` field.
    /// The message is that field's value.
    #[error("{0}")]
    Application(String),

    /// The payload could not be decoded into the endpoint's shape.
    #[error("malformed response payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A base64 image payload could not be decoded.
    #[error("invalid image data: {0}")]
    ImageDecode(#[from] base64::DecodeError),

    /// The selected image has an extension the backend cannot decode.
    #[error("unsupported image format: {0}")]
    UnsupportedImage(String),

    /// Reading or writing an image file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The request never produced an HTTP status (connect failure,
    /// interrupted body, …).
    #[error("{0}")]
    Connection(String),
}
