//! # periscope-adapter-console
//!
//! Terminal implementation of the output ports. Progress is dimmed,
//! success is green, errors are red on stderr, so the three tones stay
//! distinguishable. The image region decodes the base64 JPEG, writes it
//! to a file, and announces the path.

use std::path::PathBuf;

use console::style;
use periscope_app::ports::{ImageRegion, OutputRegion};
use periscope_domain::error::PeriscopeError;
use periscope_domain::image;

/// Text region printing to the terminal.
#[derive(Debug, Default)]
pub struct ConsolePanel;

impl OutputRegion for ConsolePanel {
    fn show_progress(&mut self, message: &str) {
        println!("{}", style(message).dim());
    }

    fn show_success(&mut self, text: &str) {
        println!("{}", style(text).green());
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{}", style(message).red().bold());
    }
}

/// Image region backed by a file on disk.
#[derive(Debug)]
pub struct ImageFileRegion {
    path: PathBuf,
}

impl ImageFileRegion {
    /// Create a region that writes the processed image to `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ImageRegion for ImageFileRegion {
    fn show(&mut self, base64_jpeg: &str) -> Result<(), PeriscopeError> {
        let bytes = image::decode_base64(base64_jpeg)?;
        std::fs::write(&self.path, bytes)?;
        println!(
            "{} {}",
            style("Processed image written to").green(),
            self.path.display()
        );
        Ok(())
    }

    // Nothing to remove on a scrolling terminal.
    fn hide(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_write_decoded_image_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let mut region = ImageFileRegion::new(path.clone());

        region.show("aGVsbG8=").unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"hello");
    }

    #[test]
    fn should_overwrite_a_previous_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let mut region = ImageFileRegion::new(path.clone());

        region.show("Zmlyc3Q=").unwrap();
        region.show("c2Vjb25k").unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }

    #[test]
    fn should_fail_on_invalid_base64() {
        let dir = tempfile::tempdir().unwrap();
        let mut region = ImageFileRegion::new(dir.path().join("out.jpg"));

        let err = region.show("not base64!").unwrap_err();

        assert!(matches!(err, PeriscopeError::ImageDecode(_)));
    }
}
