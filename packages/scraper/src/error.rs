//! Error types for the scraper.
//!
//! Uses the dual-error pattern: `ScraperError` for library consumers
//! with detailed error context, and specific variants for each failure site.

use thiserror::Error;

/// Main error type for the scraper library.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Invalid year format.
    #[error("Invalid year: '{0}'. Expected YYYY (e.g., 2026)")]
    InvalidYear(String),

    /// None of the requested union codes matched a known union.
    #[error("No valid union codes provided (e.g., BC QC AB or ALL)")]
    NoRegions,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A feed request failed for a specific resource.
    #[error("Failed to fetch {context}: {source}")]
    FeedRequest {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts were used up.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Feed base URL could not be parsed.
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration could not be parsed.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Payload did not have the expected shape.
    #[error("Unexpected payload for {context}: {detail}")]
    UnexpectedPayload { context: String, detail: String },

    /// No season is flagged active for the region.
    #[error("No active season found for {region}")]
    NoActiveSeason { region: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// One or more regions failed in a multi-region run.
    #[error("Scrape failed for: {}", regions.join(", "))]
    RegionsFailed { regions: Vec<String> },
}

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, ScraperError>;
