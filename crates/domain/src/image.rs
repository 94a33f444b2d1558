//! Base64 image payload helpers.
//!
//! The backend accepts images as `data:<mime>;base64,` URLs and returns
//! processed images as bare base64. The decoder tolerates both shapes,
//! mirroring the prefix-stripping the backend itself performs.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::PeriscopeError;

/// MIME type for an image file, dispatched on its extension.
///
/// # Errors
///
/// Returns [`PeriscopeError::UnsupportedImage`] for extensions the
/// backend cannot decode.
pub fn mime_for_path(path: &Path) -> Result<&'static str, PeriscopeError> {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return Err(PeriscopeError::UnsupportedImage(
            path.display().to_string(),
        ));
    };

    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        _ => Err(PeriscopeError::UnsupportedImage(extension.to_string())),
    }
}

/// Encode raw image bytes as a base64 data URL.
#[must_use]
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode a base64 image payload, with or without a data-URL prefix.
///
/// # Errors
///
/// Returns [`PeriscopeError::ImageDecode`] when the payload is not valid
/// base64.
pub fn decode_base64(payload: &str) -> Result<Vec<u8>, PeriscopeError> {
    let data = payload
        .split_once(',')
        .map_or(payload, |(_, encoded)| encoded);
    Ok(STANDARD.decode(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_dispatch_mime_on_extension() {
        assert_eq!(mime_for_path(Path::new("cat.jpg")).unwrap(), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("cat.JPEG")).unwrap(), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("cat.png")).unwrap(), "image/png");
    }

    #[test]
    fn should_reject_unsupported_extensions() {
        let err = mime_for_path(Path::new("cat.gif")).unwrap_err();
        assert_eq!(err.to_string(), "unsupported image format: gif");

        assert!(mime_for_path(Path::new("noextension")).is_err());
    }

    #[test]
    fn should_round_trip_through_a_data_url() {
        let bytes = b"\xff\xd8\xff\xe0fake-jpeg";
        let url = to_data_url("image/jpeg", bytes);
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(decode_base64(&url).unwrap(), bytes);
    }

    #[test]
    fn should_decode_bare_base64_without_prefix() {
        assert_eq!(decode_base64("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn should_report_invalid_base64() {
        let err = decode_base64("not base64!").unwrap_err();
        assert!(matches!(err, PeriscopeError::ImageDecode(_)));
    }
}
