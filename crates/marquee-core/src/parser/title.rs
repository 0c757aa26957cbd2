//! # Title Resolution
//!
//! Decides where structured metadata begins in the normalized string and
//! cleans the title that precedes it.
//!
//! Precedence: the earliest year or season/episode offset ends the title.
//! Quality and language offsets never do. Only when neither a year nor a
//! season/episode was found does the keyword scan run; if that finds
//! nothing either, the whole normalized string is the title.

use std::sync::Arc;

use regex::Regex;

use crate::error::{MarqueeError, Result};
use crate::lexicon::Lexicon;

/// Keywords that end the title in the fallback scan.
const BOUNDARY_KEYWORDS: &[&str] = &[
    "4k", "2160p", "1080p", "720p", "480p", "web-dl", "webdl", "webrip", "bluray", "hdtv",
    "hdrip", "x264", "hindi", "english", "eng", "dual", "audio",
];

/// Cuts the normalized string at the title boundary.
///
/// `offsets` are the year and season/episode match starts. The keyword
/// scan starts at the second token, so a one-word title such as "Hindi"
/// is never read as metadata.
#[must_use]
pub fn resolve_boundary<'a>(text: &'a str, offsets: &[usize]) -> &'a str {
    if let Some(end) = offsets.iter().copied().min() {
        return text.get(..end).unwrap_or(text).trim();
    }

    let tokens: Vec<&str> = text.split(' ').collect();
    let cut = tokens
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, token)| {
            let token = token.to_lowercase();
            BOUNDARY_KEYWORDS.contains(&token.as_str())
        })
        .map(|(i, _)| i);

    match cut {
        Some(i) => {
            // Byte length of the first `i` tokens and the spaces between them.
            let end = tokens[..i].iter().map(|t| t.len() + 1).sum::<usize>().saturating_sub(1);
            text[..end].trim()
        }
        None => text.trim(),
    }
}

/// Removes generic spam words and leftover symbols from a resolved title.
#[derive(Debug, Clone)]
pub struct TitleCleaner {
    lexicon: Arc<Lexicon>,
    re_symbols: Regex,
    re_whitespace: Regex,
}

impl TitleCleaner {
    /// # Errors
    ///
    /// Returns `MarqueeError::RegexError` if a pattern fails to compile.
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        Ok(Self {
            lexicon,
            re_symbols: Regex::new(r"[^\p{Alphabetic}\p{Nd}\s]")?,
            re_whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Cleans `title`; `input` is only used for the error message.
    ///
    /// # Errors
    ///
    /// Returns `MarqueeError::EmptyTitle` if nothing usable is left.
    pub fn clean(&self, title: &str, input: &str) -> Result<String> {
        let without_spam = self.lexicon.strip_spam_words(title);
        let without_symbols = self.re_symbols.replace_all(&without_spam, "");
        let cleaned = self
            .re_whitespace
            .replace_all(&without_symbols, " ")
            .trim()
            .to_string();

        if cleaned.is_empty() {
            return Err(MarqueeError::EmptyTitle {
                input: input.to_string(),
            });
        }
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> TitleCleaner {
        TitleCleaner::new(Arc::new(Lexicon::builtin().unwrap())).unwrap()
    }

    #[test]
    fn earliest_offset_wins() {
        let text = "The Office S02E05 2006 720p";
        assert_eq!(resolve_boundary(text, &[18, 11]), "The Office");
        assert_eq!(resolve_boundary(text, &[11]), "The Office");
    }

    #[test]
    fn offset_at_start_gives_empty_title() {
        assert_eq!(resolve_boundary("2024 1080p", &[0]), "");
    }

    #[test]
    fn keyword_fallback_cuts_before_keyword() {
        assert_eq!(
            resolve_boundary("Some Movie Name 1080p WEB DL", &[]),
            "Some Movie Name"
        );
        assert_eq!(resolve_boundary("Movie Dual Audio 720p", &[]), "Movie");
        assert_eq!(resolve_boundary("Movie HINDI", &[]), "Movie");
    }

    #[test]
    fn keyword_fallback_never_cuts_first_token() {
        assert_eq!(resolve_boundary("Hindi Medium 720p", &[]), "Hindi Medium");
        assert_eq!(resolve_boundary("English", &[]), "English");
    }

    #[test]
    fn no_keyword_keeps_whole_string() {
        assert_eq!(resolve_boundary("Some Random Title", &[]), "Some Random Title");
        assert_eq!(resolve_boundary("", &[]), "");
    }

    #[test]
    fn cleanup_strips_spam_words() {
        let c = cleaner();
        assert_eq!(c.clean("Avatar HD Premium Download", "x").unwrap(), "Avatar");
        assert_eq!(c.clean("Kung Fu Panda 4", "x").unwrap(), "Kung Fu Panda 4");
        assert_eq!(c.clean("The Office", "x").unwrap(), "The Office");
    }

    #[test]
    fn cleanup_keeps_ordinary_title_words() {
        let c = cleaner();
        for title in ["Free Guy", "Top Gun Maverick", "The Crew", "New Amsterdam", "Drive", "The Movie"] {
            assert_eq!(c.clean(title, "x").unwrap(), title);
        }
    }

    #[test]
    fn cleanup_strips_symbols_but_keeps_letters() {
        let c = cleaner();
        assert_eq!(c.clean("Ocean's Eleven!", "x").unwrap(), "Oceans Eleven");
        assert_eq!(c.clean("Amélie @ Paris", "x").unwrap(), "Amélie Paris");
    }

    #[test]
    fn cleanup_to_nothing_is_empty_title() {
        let c = cleaner();
        let err = c.clean("HD Download Channel", "HD.Download.Channel.mkv").unwrap_err();
        assert!(matches!(err, MarqueeError::EmptyTitle { ref input } if input == "HD.Download.Channel.mkv"));
        assert!(matches!(c.clean("   ", "x"), Err(MarqueeError::EmptyTitle { .. })));
    }
}
