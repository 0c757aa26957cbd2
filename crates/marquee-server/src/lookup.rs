//! Best-effort release-year lookup against TMDB.
//!
//! Used only to backfill a year the file name did not carry. Every failure
//! is reported to the caller, which logs it and carries on without a year.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// What to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// `Tv` when the release carried a season or an episode.
    pub fn from_episode_fields(season: Option<u32>, episode: Option<u32>) -> Self {
        if season.is_some() || episode.is_some() {
            Self::Tv
        } else {
            Self::Movie
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lookup service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Finds the release year of a title.
#[async_trait]
pub trait YearLookup: Send + Sync {
    /// `Ok(None)` when the service has no dated match.
    async fn lookup_year(&self, title: &str, kind: MediaKind) -> Result<Option<u16>, LookupError>;
}

/// TMDB v3 search client.
#[derive(Debug, Clone)]
pub struct TmdbLookup {
    http: reqwest::Client,
    api_key: String,
    language: String,
    base_url: String,
}

impl TmdbLookup {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(
        api_key: impl Into<String>,
        language: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, api_key, language))
    }

    pub fn with_client(
        http: reqwest::Client,
        api_key: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            language: language.into(),
            base_url: TMDB_BASE_URL.to_string(),
        }
    }

    /// Points the client at another TMDB-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl YearLookup for TmdbLookup {
    async fn lookup_year(&self, title: &str, kind: MediaKind) -> Result<Option<u16>, LookupError> {
        let path = match kind {
            MediaKind::Movie => "/search/movie",
            MediaKind::Tv => "/search/tv",
        };
        let url = format!("{}{path}", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("query", title),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::Status { status, body });
        }

        let search: SearchResponse = resp.json().await?;
        Ok(search.first_year())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    /// `release_date` for movies, `first_air_date` for shows.
    #[serde(alias = "first_air_date")]
    release_date: Option<String>,
}

impl SearchResponse {
    /// Year of the first result whose date parses.
    fn first_year(&self) -> Option<u16> {
        self.results
            .iter()
            .filter_map(|r| r.release_date.as_deref())
            .find_map(parse_year)
    }
}

/// Year part of a `YYYY-MM-DD` date.
fn parse_year(date: &str) -> Option<u16> {
    let year = date.trim().get(..4)?;
    year.parse().ok().filter(|y| *y > 0)
}
