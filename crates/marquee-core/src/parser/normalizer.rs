//! # Normalizer
//!
//! Turns a raw release name into a space-delimited token string. The size
//! literal is captured from the raw input before anything else runs,
//! since the later punctuation pass would split `1.5GB` into `1 5GB`.

use std::sync::Arc;

use regex::Regex;

use crate::error::Result;
use crate::lexicon::Lexicon;

/// Output of [`Normalizer::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Space-delimited working string. Case is preserved.
    pub text: String,
    /// Size literal such as `1.5GB`, read from the raw input.
    pub size: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
    re_size: Regex,
    re_extension: Regex,
    re_brackets: Regex,
    re_punctuation: Regex,
    re_whitespace: Regex,
}

impl Normalizer {
    /// Constructs a `Normalizer` that strips the given lexicon's release groups.
    ///
    /// # Errors
    ///
    /// Returns `MarqueeError::RegexError` if a pattern fails to compile.
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        Ok(Self {
            lexicon,
            re_size: Regex::new(r"(?i)[0-9]+(?:\.[0-9]+)?\s?(?:gb|mb)")?,
            // A letter first, so ".2024" or ".4" at the end is not an extension.
            re_extension: Regex::new(r"(?i)\.[a-z][a-z0-9]{1,4}$")?,
            re_brackets: Regex::new(r"\[[^\]]*\]")?,
            re_punctuation: Regex::new(r"[._()+\-]")?,
            re_whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Runs the full normalization: size capture on the raw input, then
    /// extension, brackets, blocklist and punctuation on a working copy.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> Normalized {
        let size = self.capture_size(raw);

        let work = self.re_extension.replace(raw, "");
        let work = self.re_brackets.replace_all(&work, " ");
        let work = self.lexicon.strip_blocklisted(&work);
        let text = self.collapse(&work);

        Normalized { text, size }
    }

    /// Captures the first size literal, dropping inner whitespace and
    /// uppercasing the unit.
    #[must_use]
    pub fn capture_size(&self, raw: &str) -> Option<String> {
        self.re_size.find(raw).map(|m| {
            m.as_str()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_uppercase()
        })
    }

    /// Punctuation to spaces, whitespace runs to one space, trimmed.
    fn collapse(&self, input: &str) -> String {
        let spaced = self.re_punctuation.replace_all(input, " ");
        self.re_whitespace
            .replace_all(&spaced, " ")
            .trim()
            .to_string()
    }
}
