//! # Lexicon
//!
//! The static tables the parser consults: the release-group blocklist,
//! the language dictionary and the spam-word dictionary. A [`Lexicon`]
//! compiles them once and is shared read-only (behind an `Arc`) by every
//! parser built from it.

pub mod blocklist;
pub mod languages;
pub mod spam;

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::error::Result;

pub use languages::DUAL_AUDIO;

/// Compiled, immutable lookup tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    blocklist: Option<Regex>,
    spam_words: Option<Regex>,
    languages: HashMap<String, String>,
    group_count: usize,
}

impl Lexicon {
    /// Builds the lexicon from the tables bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns `MarqueeError::RegexError` if a pattern fails to compile
    /// (should never happen with the bundled tables).
    pub fn builtin() -> Result<Self> {
        Self::new(
            blocklist::RELEASE_GROUPS,
            languages::LANGUAGES,
            spam::SPAM_WORDS,
        )
    }

    /// Builds a lexicon from caller-supplied tables.
    ///
    /// `languages` maps each canonical name to its accepted spellings and codes.
    pub fn new(groups: &[&str], languages: &[(&str, &[&str])], spam_words: &[&str]) -> Result<Self> {
        let mut alternatives: Vec<String> = Vec::with_capacity(groups.len() * 2);
        for group in groups {
            let group = group.trim().trim_start_matches('@');
            if group.is_empty() {
                continue;
            }
            alternatives.push(format!("@{group}"));
            alternatives.push(group.to_string());
        }
        alternatives.sort_by_key(|alt| alt.to_lowercase());
        alternatives.dedup_by_key(|alt| alt.to_lowercase());
        let group_count = alternatives.len() / 2;
        // Longest first, so "CineFlixHD" wins over its prefix "CineFlix".
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let blocklist = compile_alternation(&alternatives, false)?;

        let spam: Vec<String> = spam_words
            .iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        let spam_words = compile_alternation(&spam, true)?;

        let mut table = HashMap::new();
        for (canonical, spellings) in languages {
            for spelling in *spellings {
                table
                    .entry(spelling.to_lowercase())
                    .or_insert_with(|| (*canonical).to_string());
            }
        }

        Ok(Self {
            blocklist,
            spam_words,
            languages: table,
            group_count,
        })
    }

    /// Removes every blocklisted name, case-insensitively and without
    /// regard for word boundaries.
    #[must_use]
    pub fn strip_blocklisted(&self, input: &str) -> String {
        match &self.blocklist {
            Some(re) => re.replace_all(input, "").into_owned(),
            None => input.to_string(),
        }
    }

    /// Replaces whole-word spam matches with a space.
    #[must_use]
    pub fn strip_spam_words(&self, input: &str) -> String {
        match &self.spam_words {
            Some(re) => re.replace_all(input, " ").into_owned(),
            None => input.to_string(),
        }
    }

    /// Canonical language for a token, matched case-insensitively.
    #[must_use]
    pub fn language(&self, token: &str) -> Option<&str> {
        self.languages
            .get(&token.to_lowercase())
            .map(String::as_str)
    }

    /// Number of distinct release-group names in the blocklist.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_count
    }
}

/// Compiles literals into one case-insensitive alternation. Every
/// alternative is escaped, so the pattern has no nested quantifiers.
fn compile_alternation(literals: &[String], whole_words: bool) -> Result<Option<Regex>> {
    if literals.is_empty() {
        return Ok(None);
    }

    let body = literals
        .iter()
        .map(|lit| regex::escape(lit))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = if whole_words {
        format!(r"\b(?:{body})\b")
    } else {
        format!("(?:{body})")
    };

    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(1 << 24)
        .build()?;
    Ok(Some(re))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::builtin().unwrap()
    }

    #[test]
    fn builtin_tables_compile() {
        let lex = lexicon();
        assert!(lex.group_count() > 250, "groups: {}", lex.group_count());
    }

    #[test]
    fn blocklist_removes_glued_names_with_and_without_at() {
        let lex = lexicon();
        assert_eq!(lex.strip_blocklisted("@CineFlixHD"), "");
        assert_eq!(lex.strip_blocklisted("Movie.2024.HDHub4u.mkv"), "Movie.2024..mkv");
        assert_eq!(lex.strip_blocklisted("www.1TamilMV.Leo"), "www..Leo");
        assert_eq!(lex.strip_blocklisted("MovieTAMILBLASTERS"), "Movie");
    }

    #[test]
    fn blocklist_prefers_longest_name() {
        let lex = Lexicon::new(&["CineFlix", "CineFlixHD"], &[], &[]).unwrap();
        assert_eq!(lex.strip_blocklisted("x@CineFlixHDy"), "xy");
        assert_eq!(lex.strip_blocklisted("xCineFlixy"), "xy");
    }

    #[test]
    fn blocklist_escapes_special_characters() {
        let lex = Lexicon::new(&["YTS.MX", "Team+X"], &[], &[]).unwrap();
        assert_eq!(lex.strip_blocklisted("Movie.YTS.MX"), "Movie.");
        assert_eq!(lex.strip_blocklisted("MovieYTSxMX"), "MovieYTSxMX");
        assert_eq!(lex.strip_blocklisted("Movie-Team+X"), "Movie-");
    }

    #[test]
    fn blocklist_leaves_ordinary_titles_alone() {
        let lex = lexicon();
        for title in [
            "Kung.Fu.Panda.4.2024.1080p.WEB-DL.Hindi-English",
            "The.Office.S02E05.720p.HDTV.x264-GROUP",
            "The Dark Knight Rises",
            "London Has Fallen",
            "Remember the Titans",
        ] {
            assert_eq!(lex.strip_blocklisted(title), title);
        }
    }

    #[test]
    fn empty_tables_are_no_ops() {
        let lex = Lexicon::new(&[], &[], &[]).unwrap();
        assert_eq!(lex.strip_blocklisted("anything"), "anything");
        assert_eq!(lex.strip_spam_words("hd movie"), "hd movie");
        assert_eq!(lex.language("hindi"), None);
        assert_eq!(lex.group_count(), 0);
    }

    #[test]
    fn spam_words_match_whole_words_only() {
        let lex = lexicon();
        assert_eq!(lex.strip_spam_words("Avatar HD").trim(), "Avatar");
        assert_eq!(lex.strip_spam_words("Shadow"), "Shadow");
        assert_eq!(lex.strip_spam_words("Robot"), "Robot");
    }

    #[test]
    fn language_lookup_is_case_insensitive() {
        let lex = lexicon();
        assert_eq!(lex.language("HINDI"), Some("Hindi"));
        assert_eq!(lex.language("eng"), Some("English"));
        assert_eq!(lex.language("Dual"), Some(DUAL_AUDIO));
        assert_eq!(lex.language("audio"), Some(DUAL_AUDIO));
        assert_eq!(lex.language("panda"), None);
    }

    #[test]
    fn lexicon_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Lexicon>();
    }
}
