//! Image source resolution
//!
//! Turns a path, URL, or data URL into the base64 payload the print
//! server expects. Decoding and rendering stay on the server side; this
//! boundary only fetches bytes and encodes them.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::{debug, instrument};

use crate::error::ImageError;

/// Resolve an image source to a base64 payload
///
/// Accepted sources:
/// - `data:` URLs — the payload after the comma is passed through as is
/// - `http://` / `https://` URLs — fetched and encoded
/// - anything else — read from the local filesystem and encoded
#[instrument(skip(source), fields(kind = source_kind(source)))]
pub async fn image_to_base64(source: &str) -> Result<String, ImageError> {
    if let Some(rest) = source.strip_prefix("data:") {
        return match rest.split_once(',') {
            Some((_, payload)) => Ok(payload.to_string()),
            None => Err(ImageError::InvalidDataUrl),
        };
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        let bytes = reqwest::get(source)
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        debug!(len = bytes.len(), "image fetched");
        return Ok(STANDARD.encode(&bytes));
    }

    let bytes = tokio::fs::read(source).await?;
    debug!(len = bytes.len(), "image read");
    Ok(STANDARD.encode(&bytes))
}

fn source_kind(source: &str) -> &'static str {
    if source.starts_with("data:") {
        "data-url"
    } else if source.starts_with("http://") || source.starts_with("https://") {
        "url"
    } else {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn data_url_payload_passes_through() {
        let payload = image_to_base64("data:image/png;base64,iVBORw0KGgo=")
            .await
            .unwrap();
        assert_eq!(payload, "iVBORw0KGgo=");
    }

    #[tokio::test]
    async fn data_url_without_comma_is_rejected() {
        let err = image_to_base64("data:image/png;base64").await.unwrap_err();
        assert!(matches!(err, ImageError::InvalidDataUrl));
    }

    #[tokio::test]
    async fn file_source_is_encoded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG").unwrap();

        let payload = image_to_base64(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(payload, STANDARD.encode(b"\x89PNG"));
    }

    #[tokio::test]
    async fn missing_file_fails() {
        let err = image_to_base64("/nonexistent/logo.png").await.unwrap_err();
        assert!(matches!(err, ImageError::Io(_)));
    }
}
