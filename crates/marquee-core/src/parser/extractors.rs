//! # Field Extractors
//!
//! Independent scanners over the normalized string. Year and
//! season/episode report their match offsets for the title boundary;
//! quality and languages do not take part in it.

use std::sync::Arc;

use regex::Regex;

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::types::{Extracted, Quality};

/// Season and episode, each with its own match offset.
///
/// When found by a combined pattern both are `Found` at the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeasonEpisode {
    pub season: Extracted<u32>,
    pub episode: Extracted<u32>,
}

impl SeasonEpisode {
    /// Earliest offset of either field, if any was found.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match (self.season.offset(), self.episode.offset()) {
            (Some(s), Some(e)) => Some(s.min(e)),
            (s, e) => s.or(e),
        }
    }
}

/// `true` when `1900 < year < current_year + 5`.
#[must_use]
pub fn year_in_window(year: u16, current_year: i32) -> bool {
    let year = i32::from(year);
    1900 < year && year < current_year + 5
}

#[derive(Debug, Clone)]
pub struct FieldExtractors {
    lexicon: Arc<Lexicon>,
    re_year: Regex,
    re_season_episode: Regex,
    re_cross: Regex,
    re_season: Regex,
    re_episode: Regex,
    re_quality: Regex,
}

impl FieldExtractors {
    /// Constructs the extractors with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `MarqueeError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        Ok(Self {
            lexicon,
            re_year: Regex::new(r"\b(19[0-9]{2}|20[0-9]{2})\b")?,
            // The season and episode must be joined by a separator, an `x`,
            // or an episode keyword; "Part 2 2011" never reads as 2x201.
            re_season_episode: Regex::new(
                r"(?i)\b(?:season|series|part|s)[\s._-]*([0-9]{1,2})(?:[\s._-]*(?:episode|ep|e)|[\s._-]*x|[\s._-]+)[\s._-]*([0-9]{1,3})\b",
            )?,
            re_cross: Regex::new(r"(?i)\b([0-9]{1,2})x([0-9]{1,3})\b")?,
            re_season: Regex::new(r"(?i)\b(?:season|series|s)[\s._-]*([0-9]{1,2})\b")?,
            re_episode: Regex::new(r"(?i)\b(?:episode|ep|e)[\s._-]*([0-9]{1,3})\b")?,
            re_quality: Regex::new(r"(?i)\b(4k|2160p|1080p|720p|480p)\b")?,
        })
    }

    /// First four-digit `19xx`/`20xx` token, kept only if it lies inside
    /// `(1900, current_year + 5)`.
    ///
    /// Only the first token is considered: "Blade Runner 2049 2017" has no
    /// year while the window ends before 2049.
    #[must_use]
    pub fn year(&self, text: &str, current_year: i32) -> Extracted<u16> {
        let Some(m) = self.re_year.captures(text).and_then(|caps| caps.get(1)) else {
            return Extracted::NotFound;
        };
        match m.as_str().parse::<u16>() {
            Ok(year) if year_in_window(year, current_year) => Extracted::Found {
                offset: m.start(),
                value: year,
            },
            _ => Extracted::NotFound,
        }
    }

    /// Three tiers, first success wins: the combined keyword pattern, the
    /// bare `1x02` form, then independent season-only and episode-only scans.
    #[must_use]
    pub fn season_episode(&self, text: &str) -> SeasonEpisode {
        if let Some(found) = Self::combined(&self.re_season_episode, text) {
            return found;
        }
        if let Some(found) = Self::combined(&self.re_cross, text) {
            return found;
        }

        SeasonEpisode {
            season: Self::single(&self.re_season, text),
            episode: Self::single(&self.re_episode, text),
        }
    }

    fn combined(re: &Regex, text: &str) -> Option<SeasonEpisode> {
        let caps = re.captures(text)?;
        let offset = caps.get(0)?.start();
        let season: u32 = caps[1].parse().ok()?;
        let episode: u32 = caps[2].parse().ok()?;
        Some(SeasonEpisode {
            season: Extracted::Found {
                offset,
                value: season,
            },
            episode: Extracted::Found {
                offset,
                value: episode,
            },
        })
    }

    fn single(re: &Regex, text: &str) -> Extracted<u32> {
        re.captures(text)
            .and_then(|caps| {
                let offset = caps.get(0)?.start();
                let value = caps[1].parse().ok()?;
                Some(Extracted::Found { offset, value })
            })
            .unwrap_or_default()
    }

    /// First quality tag anywhere in the string.
    #[must_use]
    pub fn quality(&self, text: &str) -> Extracted<Quality> {
        self.re_quality
            .find(text)
            .and_then(|m| {
                Quality::from_token(m.as_str()).map(|value| Extracted::Found {
                    offset: m.start(),
                    value,
                })
            })
            .unwrap_or_default()
    }

    /// Audio languages in token order, without duplicates.
    ///
    /// `eng sub`/`eng subs` and `esub`/`esubs` mark subtitles, not audio,
    /// and are skipped.
    #[must_use]
    pub fn languages(&self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
        let mut languages: Vec<String> = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].as_str();
            let next = tokens.get(i + 1).map(String::as_str);

            if token == "eng" && matches!(next, Some("sub" | "subs")) {
                i += 2;
                continue;
            }
            if token == "esub" || token == "esubs" {
                i += 1;
                continue;
            }
            if let Some(language) = self.lexicon.language(token) {
                if !languages.iter().any(|l| l == language) {
                    languages.push(language.to_string());
                }
            }
            i += 1;
        }

        languages
    }
}
