use serde::{Deserialize, Serialize};

use super::quality::Quality;

/// The structured output of the Marquee parsing engine.
///
/// Produced fresh for every call; it carries no identity and is never
/// persisted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMetadata {
    /// Cleaned release title. Never empty.
    pub title: String,

    /// Release year, inside the accepted year window.
    pub year: Option<u16>,

    /// Season number.
    pub season: Option<u32>,

    /// Episode number. May be set without a season.
    pub episode: Option<u32>,

    /// Video quality tag.
    pub quality: Option<Quality>,

    /// Audio languages in first-seen order, without duplicates.
    pub languages: Vec<String>,

    /// File size literal such as `"1.5GB"`, read from the raw input.
    pub size: Option<String>,
}

impl ParsedMetadata {
    /// Creates a result carrying only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            season: None,
            episode: None,
            quality: None,
            languages: Vec::new(),
            size: None,
        }
    }

    /// Returns `true` if a season or episode was recovered.
    #[must_use]
    pub fn is_episodic(&self) -> bool {
        self.season.is_some() || self.episode.is_some()
    }

    /// Returns `true` if any metadata beyond the title was extracted.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        self.year.is_some()
            || self.is_episodic()
            || self.quality.is_some()
            || !self.languages.is_empty()
            || self.size.is_some()
    }
}

impl std::fmt::Display for ParsedMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsedMetadata(title={:?}", self.title)?;
        if let Some(year) = self.year {
            write!(f, ", year={year}")?;
        }
        if let Some(season) = self.season {
            write!(f, ", season={season}")?;
        }
        if let Some(episode) = self.episode {
            write!(f, ", episode={episode}")?;
        }
        if let Some(quality) = self.quality {
            write!(f, ", quality={quality}")?;
        }
        if !self.languages.is_empty() {
            write!(f, ", languages={}", self.languages.join("+"))?;
        }
        if let Some(ref size) = self.size {
            write!(f, ", size={size}")?;
        }
        write!(f, ")")
    }
}
