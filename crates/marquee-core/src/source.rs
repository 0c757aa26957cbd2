//! Filename source for download URLs.

use url::Url;

use crate::error::{MarqueeError, Result};

/// Takes the final non-empty path segment of `url`, percent-decoded.
///
/// # Errors
///
/// Returns `MarqueeError::InvalidUrl` when the URL does not parse, has no
/// path segment, or the segment is not valid percent-encoded UTF-8.
pub fn filename_from_url(url: &str) -> Result<String> {
    let invalid = |reason: String| MarqueeError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    let segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .ok_or_else(|| invalid("no path segment".to_string()))?;

    let decoded = urlencoding::decode(segment).map_err(|e| invalid(e.to_string()))?;
    let decoded = decoded.trim();
    if decoded.is_empty() {
        return Err(invalid("empty filename".to_string()));
    }
    Ok(decoded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_decoded_last_segment() {
        let name = filename_from_url(
            "https://cdn.example.com/files/The%20Office%20S02E05.mkv?dl=1#part",
        )
        .unwrap();
        assert_eq!(name, "The Office S02E05.mkv");
    }

    #[test]
    fn skips_trailing_slash() {
        let name = filename_from_url("https://example.com/movies/Leo.2023.mkv/").unwrap();
        assert_eq!(name, "Leo.2023.mkv");
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = filename_from_url("not a url").unwrap_err();
        assert!(matches!(err, MarqueeError::InvalidUrl { ref url, .. } if url == "not a url"));
    }

    #[test]
    fn rejects_url_without_path() {
        assert!(matches!(
            filename_from_url("https://example.com/"),
            Err(MarqueeError::InvalidUrl { .. })
        ));
        assert!(matches!(
            filename_from_url("mailto:someone@example.com"),
            Err(MarqueeError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_invalid_utf8_escape() {
        let err = filename_from_url("https://example.com/files/bad%FF%FE.mkv").unwrap_err();
        assert!(matches!(err, MarqueeError::InvalidUrl { .. }));
    }
}
