use thiserror::Error;

/// Errors that can occur during Marquee core operations.
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Boundary resolution and cleanup left no usable title.
    #[error("could not extract a valid title from {input:?}")]
    EmptyTitle {
        /// The input that could not be parsed.
        input: String,
    },

    /// A download URL did not yield a decodable filename segment.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl {
        /// The URL as received.
        url: String,
        /// Why no filename could be taken from it.
        reason: String,
    },

    /// A lexicon pattern failed to compile (should not happen with the built-in tables).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for Marquee operations.
pub type Result<T> = std::result::Result<T, MarqueeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = MarqueeError::EmptyTitle {
            input: "@CineFlixHD.mkv".into(),
        };
        assert!(err.to_string().contains("could not extract a valid title"));
        assert!(err.to_string().contains("@CineFlixHD.mkv"));

        let err = MarqueeError::InvalidUrl {
            url: "not a url".into(),
            reason: "relative URL without a base".into(),
        };
        assert!(err.to_string().contains("not a url"));
        assert!(err.to_string().contains("relative URL"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarqueeError>();
    }
}
