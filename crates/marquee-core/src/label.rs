//! # Label Generator
//!
//! Reassembles a canonical display string for a download link from its
//! structured fields, e.g. `S01E03 1080p Hindi [900MB]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ParsedMetadata, Quality};

/// Label shown when no field is present.
pub const FALLBACK_LABEL: &str = "Download";

/// Input of [`generate_label`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFields {
    pub quality: Option<Quality>,
    pub languages: Vec<String>,
    pub size: Option<String>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

impl From<&ParsedMetadata> for LabelFields {
    fn from(parsed: &ParsedMetadata) -> Self {
        Self {
            quality: parsed.quality,
            languages: parsed.languages.clone(),
            size: parsed.size.clone(),
            season: parsed.season,
            episode: parsed.episode,
        }
    }
}

/// How languages are joined inside a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSeparator {
    /// `Hindi+English`
    #[default]
    Plus,
    /// `Hindi, English`
    Comma,
}

impl LanguageSeparator {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Comma => ", ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language separator {0:?}, expected \"plus\" or \"comma\"")]
pub struct ParseSeparatorError(String);

impl FromStr for LanguageSeparator {
    type Err = ParseSeparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plus" | "+" => Ok(Self::Plus),
            "comma" | "," => Ok(Self::Comma),
            _ => Err(ParseSeparatorError(s.to_string())),
        }
    }
}

impl fmt::Display for LanguageSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "plus"),
            Self::Comma => write!(f, "comma"),
        }
    }
}

/// Builds the canonical label from the fields that are present.
///
/// Order: season/episode, quality, languages, `[size]`. With nothing to
/// show the label is [`FALLBACK_LABEL`].
#[must_use]
pub fn generate_label(fields: &LabelFields, separator: LanguageSeparator) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);

    if let Some(season) = fields.season {
        parts.push(match fields.episode {
            Some(episode) => format!("S{season:02}E{episode:02}"),
            None => format!("Season {season:02}"),
        });
    }
    if let Some(quality) = fields.quality {
        parts.push(quality.as_str().to_string());
    }
    if !fields.languages.is_empty() {
        parts.push(fields.languages.join(separator.as_str()));
    }
    if let Some(size) = fields.size.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("[{size}]"));
    }

    if parts.is_empty() {
        return FALLBACK_LABEL.to_string();
    }
    parts.join(" ")
}
