//! Route handlers.

use axum::extract::State;
use axum::Json;
use marquee_core::{filename_from_url, generate_label, LanguageSeparator, ParsedMetadata, Quality};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::lookup::{LookupError, MediaKind};

/// Health check endpoint.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub movie_name: String,
    pub year: Option<u16>,
    pub languages: Vec<String>,
    pub quality: Option<Quality>,
    pub size: Option<String>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

impl From<ParsedMetadata> for ParseResponse {
    fn from(parsed: ParsedMetadata) -> Self {
        Self {
            movie_name: parsed.title,
            year: parsed.year,
            languages: parsed.languages,
            quality: parsed.quality,
            size: parsed.size,
            season: parsed.season,
            episode: parsed.episode,
        }
    }
}

/// Parses the file name of a download URL, backfilling a missing year.
pub async fn parse_release(
    State(ctx): State<AppContext>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, ApiError> {
    let filename = filename_from_url(&req.url)?;
    let mut parsed = ctx.parser.parse(&filename)?;

    if parsed.year.is_none() {
        parsed.year = backfill_year(&ctx, &parsed).await;
    }

    Ok(Json(parsed.into()))
}

/// Single lookup attempt; failures and out-of-window years yield `None`.
async fn backfill_year(ctx: &AppContext, parsed: &ParsedMetadata) -> Option<u16> {
    let lookup = ctx.lookup.as_ref()?;
    let kind = MediaKind::from_episode_fields(parsed.season, parsed.episode);

    let outcome = tokio::time::timeout(ctx.lookup_timeout, lookup.lookup_year(&parsed.title, kind))
        .await
        .unwrap_or(Err(LookupError::Timeout(ctx.lookup_timeout)));

    match outcome {
        Ok(year) => {
            debug!(title = %parsed.title, ?kind, ?year, "year lookup finished");
            year.filter(|y| ctx.parser.config().accepts_year(*y))
        }
        Err(e) => {
            warn!(title = %parsed.title, error = %e, "year lookup failed");
            None
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LabelRequest {
    pub url: String,
    #[serde(default)]
    pub label: String,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub separator: Option<LanguageSeparator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelResponse {
    pub label: String,
}

/// Builds the canonical label for a stored download link.
pub async fn label_link(
    State(ctx): State<AppContext>,
    Json(req): Json<LabelRequest>,
) -> Result<Json<LabelResponse>, ApiError> {
    if req.url.trim().is_empty() {
        return Err(ApiError::BadRequest("url must not be empty".to_string()));
    }

    let fields = ctx
        .parser
        .describe_link(&req.url, &req.label, req.season, req.episode);
    let label = generate_label(&fields, req.separator.unwrap_or(ctx.separator));

    Ok(Json(LabelResponse { label }))
}
