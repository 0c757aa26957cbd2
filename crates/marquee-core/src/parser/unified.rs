//! # Unified Parser Interface
//!
//! Wires the normalizer, field extractors and title resolution into one
//! pipeline, and provides the convenience entry points.

use std::sync::Arc;

use chrono::Datelike;
use tracing::debug;

use crate::error::Result;
use crate::label::LabelFields;
use crate::lexicon::Lexicon;
use crate::parser::extractors::{year_in_window, FieldExtractors};
use crate::parser::normalizer::Normalizer;
use crate::parser::title::{resolve_boundary, TitleCleaner};
use crate::source::filename_from_url;
use crate::types::ParsedMetadata;

/// Configuration for the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Reference year for the year window `(1900, current_year + 5)`.
    pub current_year: i32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            current_year: chrono::Local::now().year(),
        }
    }
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the reference year instead of reading the clock.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Whether `year` lies inside the accepted year window.
    pub fn accepts_year(&self, year: u16) -> bool {
        year_in_window(year, self.current_year)
    }
}

/// Release-name parser.
///
/// Holds only immutable state, so one instance can be cloned into or
/// shared across any number of threads.
#[derive(Debug, Clone)]
pub struct ReleaseParser {
    config: ParserConfig,
    lexicon: Arc<Lexicon>,
    normalizer: Normalizer,
    fields: FieldExtractors,
    cleaner: TitleCleaner,
}

impl ReleaseParser {
    /// Create a parser using the built-in lexicon.
    pub fn new(config: ParserConfig) -> Result<Self> {
        Self::with_lexicon(config, Arc::new(Lexicon::builtin()?))
    }

    /// Create a parser with default configuration and the built-in lexicon.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ParserConfig::default())
    }

    /// Create a parser over a lexicon that is already built, so several
    /// parsers can share one set of compiled tables.
    pub fn with_lexicon(config: ParserConfig, lexicon: Arc<Lexicon>) -> Result<Self> {
        Ok(Self {
            config,
            normalizer: Normalizer::new(Arc::clone(&lexicon))?,
            fields: FieldExtractors::new(Arc::clone(&lexicon))?,
            cleaner: TitleCleaner::new(Arc::clone(&lexicon))?,
            lexicon,
        })
    }

    /// Parse a release file name.
    ///
    /// # Examples
    /// ```
    /// use marquee_core::parser::{ParserConfig, ReleaseParser};
    /// use marquee_core::Quality;
    ///
    /// let parser = ReleaseParser::new(ParserConfig::new().with_current_year(2026)).unwrap();
    /// let result = parser.parse("The.Office.S02E05.720p.HDTV.x264-GROUP.mkv").unwrap();
    ///
    /// assert_eq!(result.title, "The Office");
    /// assert_eq!(result.season, Some(2));
    /// assert_eq!(result.episode, Some(5));
    /// assert_eq!(result.quality, Some(Quality::HD720));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `MarqueeError::EmptyTitle` if no usable title remains.
    pub fn parse(&self, input: &str) -> Result<ParsedMetadata> {
        let normalized = self.normalizer.normalize(input);
        let text = normalized.text.as_str();

        let year = self.fields.year(text, self.config.current_year);
        let season_episode = self.fields.season_episode(text);
        let quality = self.fields.quality(text);
        let languages = self.fields.languages(text);

        let offsets: Vec<usize> = [year.offset(), season_episode.offset()]
            .into_iter()
            .flatten()
            .collect();
        let raw_title = resolve_boundary(text, &offsets);
        let title = self.cleaner.clean(raw_title, input)?;

        let result = ParsedMetadata {
            title,
            year: year.into_value(),
            season: season_episode.season.into_value(),
            episode: season_episode.episode.into_value(),
            quality: quality.into_value(),
            languages,
            size: normalized.size,
        };
        debug!(input, normalized = text, %result, "parsed release name");

        Ok(result)
    }

    /// Parse the file name carried by a download URL.
    ///
    /// # Errors
    ///
    /// Returns `MarqueeError::InvalidUrl` if the URL has no decodable final
    /// path segment, or `MarqueeError::EmptyTitle` as [`ReleaseParser::parse`].
    pub fn parse_url(&self, url: &str) -> Result<ParsedMetadata> {
        let filename = filename_from_url(url)?;
        self.parse(&filename)
    }

    /// Collect label fields for a stored download link.
    ///
    /// Quality, languages and size come from the link's file name (or the
    /// raw URL when it does not parse) together with the administrator's
    /// free-text label; season and episode come from the stored record.
    pub fn describe_link(
        &self,
        url: &str,
        label: &str,
        season: Option<u32>,
        episode: Option<u32>,
    ) -> LabelFields {
        let source = filename_from_url(url).unwrap_or_else(|_| url.trim().to_string());

        let size = self
            .normalizer
            .capture_size(&format!("{source} {label}"));
        let text = [source.as_str(), label]
            .iter()
            .map(|part| self.normalizer.normalize(part).text)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        LabelFields {
            quality: self.fields.quality(&text).into_value(),
            languages: self.fields.languages(&text),
            size,
            season,
            episode,
        }
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The lexicon this parser was built over.
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }
}

/// Convenience function to parse a file name with default settings.
pub fn parse(input: &str) -> Result<ParsedMetadata> {
    let parser = ReleaseParser::with_defaults()?;
    parser.parse(input)
}

/// Convenience function to parse the file name of a download URL.
pub fn parse_url(url: &str) -> Result<ParsedMetadata> {
    let parser = ReleaseParser::with_defaults()?;
    parser.parse_url(url)
}
