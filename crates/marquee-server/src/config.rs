//! Server configuration, read from flags with environment fallbacks.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use marquee_core::LanguageSeparator;

#[derive(Debug, Clone, Parser)]
#[command(name = "marquee-server")]
#[command(about = "HTTP service for release-name parsing and download labels")]
#[command(version)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(short, long, env = "MARQUEE_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// TMDB v3 API key; year backfill is disabled without it
    #[arg(long, env = "MARQUEE_TMDB_API_KEY", hide_env_values = true)]
    pub tmdb_api_key: Option<String>,

    /// Language sent with TMDB searches
    #[arg(long, env = "MARQUEE_TMDB_LANGUAGE", default_value = "en-US")]
    pub tmdb_language: String,

    /// Upper bound for a single year lookup, in seconds
    #[arg(long, env = "MARQUEE_LOOKUP_TIMEOUT_SECS", default_value_t = 5)]
    pub lookup_timeout_secs: u64,

    /// Default language separator for labels (plus or comma)
    #[arg(long, env = "MARQUEE_LABEL_SEPARATOR", default_value_t = LanguageSeparator::Plus)]
    pub label_separator: LanguageSeparator,
}

impl ServerConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// The API key, if one was given and is not blank.
    pub fn tmdb_api_key(&self) -> Option<&str> {
        self.tmdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
