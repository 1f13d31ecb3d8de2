//! Captured image payloads.
//!
//! The capture widget hands over a `data:image/<type>;base64,<data>` URL.
//! The payload is stored and served back exactly as received; it is only
//! checked for shape and size here, never decoded into pixels.

use base64::prelude::*;

use crate::error::{Result, TryOnError};

/// A validated image payload, kept as the original data URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    data_url: String,
}

impl CapturedImage {
    /// Validates a data URL produced by the capture widget.
    ///
    /// `limit` is the maximum payload length in bytes (of the URL itself).
    pub fn parse(payload: String, limit: usize) -> Result<Self> {
        if payload.trim().is_empty() {
            return Err(TryOnError::EmptyImage);
        }

        if payload.len() > limit {
            return Err(TryOnError::ImageTooLarge { size: payload.len(), limit });
        }

        let (mime, data) = split_data_url(&payload)?;
        if !has_prefix_ignore_case(mime, "image/") || mime.len() == "image/".len() {
            return Err(TryOnError::MalformedImage(format!("unsupported media type {mime:?}")));
        }

        let decoded = BASE64_STANDARD
            .decode(data)
            .map_err(|e| TryOnError::MalformedImage(e.to_string()))?;
        if decoded.is_empty() {
            return Err(TryOnError::EmptyImage);
        }

        Ok(Self { data_url: payload })
    }

    /// Media type declared by the payload, e.g. `image/png`.
    pub fn mime_type(&self) -> &str {
        split_data_url(&self.data_url).map(|(mime, _)| mime).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.data_url
    }

    pub fn len(&self) -> usize {
        self.data_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_url.is_empty()
    }

    pub fn into_string(self) -> String {
        self.data_url
    }
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn has_suffix_ignore_case(s: &str, suffix: &str) -> bool {
    s.len() >= suffix.len()
        && s.as_bytes()[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

/// Splits a data URL into its media type and base64 data. Scheme, media
/// type and `;base64` marker are case-insensitive (RFC 2397).
fn split_data_url(payload: &str) -> Result<(&str, &str)> {
    const SCHEME: &str = "data:";
    const BASE64_MARKER: &str = ";base64";

    if !has_prefix_ignore_case(payload, SCHEME) {
        return Err(TryOnError::MalformedImage("missing data: scheme".to_string()));
    }
    let (meta, data) = payload[SCHEME.len()..]
        .split_once(',')
        .ok_or_else(|| TryOnError::MalformedImage("missing ',' before the image data".to_string()))?;
    if !has_suffix_ignore_case(meta, BASE64_MARKER) {
        return Err(TryOnError::MalformedImage("image data is not base64 encoded".to_string()));
    }

    Ok((&meta[..meta.len() - BASE64_MARKER.len()], data))
}
