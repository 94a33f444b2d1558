//! Output port — where a handler renders its result.
//!
//! Regions are injected into each handler instead of looked up ad hoc,
//! so rendering is testable without a live terminal. A handler owns its
//! regions exclusively for the duration of one invocation; nothing
//! serializes two invocations writing to the same region — last write
//! wins.

use periscope_domain::error::PeriscopeError;

/// A text region with three visual tones.
pub trait OutputRegion {
    /// Neutral in-progress indicator, written before dispatch.
    fn show_progress(&mut self, message: &str);

    /// Successful result text.
    fn show_success(&mut self, text: &str);

    /// Failure text, already prefixed with `"Error: "` by the handler.
    /// Rendered visually distinct from success output.
    fn show_error(&mut self, message: &str);
}

/// A secondary region displaying a processed image.
pub trait ImageRegion {
    /// Display a base64-encoded JPEG.
    ///
    /// # Errors
    ///
    /// Fails when the payload cannot be decoded or the sink cannot be
    /// written; the calling handler renders the failure like any other.
    fn show(&mut self, base64_jpeg: &str) -> Result<(), PeriscopeError>;

    /// Remove any currently-displayed image.
    fn hide(&mut self);
}
