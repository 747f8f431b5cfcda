//! Configuration constants and validation functions for the scraper.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use crate::error::{Result, ScraperError};
use crate::types::Union;

/// Data feed endpoint for the provincial rugby unions.
pub const SPORTSMANAGER_API_URL: &str = "https://rugbycanada.sportsmanager.ie/dataFeed/index.php";

/// League diffusion endpoint for RSEQ.
pub const RSEQ_API_URL: &str = "https://s1.rseq.ca/api/LeagueApi/GetLeagueDiffusion/";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default base directory for canonical documents.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Headers sent with every union feed request. The feed only answers
/// requests that look like they come from the diffusion site.
pub const SPORTSMANAGER_HEADERS: &[(&str, &str)] = &[
    ("User-Agent", "Mozilla/5.0"),
    ("Accept", "application/json"),
    ("Origin", "https://diffusion.rseq.ca"),
    ("Referer", "https://diffusion.rseq.ca/"),
];

/// Headers sent with every RSEQ request.
pub const RSEQ_HEADERS: &[(&str, &str)] = &[
    ("User-Agent", "Mozilla/5.0"),
    ("Accept", "application/json, text/javascript, */*; q=0.01"),
    ("Origin", "https://diffusion.rseq.ca"),
    ("Referer", "https://diffusion.rseq.ca/"),
];

/// Provincial rugby unions known to the union feed.
pub const UNIONS: &[Union] = &[
    Union { id: 13329, code: "BC" },
    Union { id: 14160, code: "NB" },
    Union { id: 14156, code: "AB" },
    Union { id: 14158, code: "MB" },
    Union { id: 13986, code: "NS" },
    Union { id: 13555, code: "ON" },
    Union { id: 14159, code: "QC" },
    Union { id: 14157, code: "SK" },
];

/// Sentinel union code selecting every union.
pub const ALL_UNIONS: &str = "ALL";

/// Year pattern: YYYY.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

/// Validate a competition year (YYYY).
///
/// # Examples
/// ```
/// use rugby_scraper::config::validate_year;
///
/// assert!(validate_year("2026").is_ok());
/// assert!(validate_year("26").is_err());
/// ```
pub fn validate_year(year: &str) -> Result<()> {
    if YEAR_PATTERN.is_match(year) {
        Ok(())
    } else {
        Err(ScraperError::InvalidYear(year.to_string()))
    }
}

/// Current calendar year, used when no year is given.
pub fn current_year() -> String {
    chrono::Local::now().format("%Y").to_string()
}

/// Look up a union by its short code (case-insensitive).
pub fn find_union(code: &str) -> Option<Union> {
    UNIONS
        .iter()
        .find(|u| u.code.eq_ignore_ascii_case(code))
        .copied()
}

/// Resolve the requested union codes.
///
/// A single `ALL` selects every union. Unknown codes are logged and skipped;
/// an empty result is an error.
///
/// # Examples
/// ```
/// use rugby_scraper::config::resolve_unions;
///
/// let unions = resolve_unions(&["qc", "XX"]).unwrap();
/// assert_eq!(unions.len(), 1);
/// assert_eq!(unions[0].id, 14159);
/// assert_eq!(resolve_unions(&["ALL"]).unwrap().len(), 8);
/// ```
pub fn resolve_unions<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Union>> {
    if let [only] = codes {
        if only.as_ref().eq_ignore_ascii_case(ALL_UNIONS) {
            return Ok(UNIONS.to_vec());
        }
    }

    let mut unions: Vec<Union> = Vec::new();
    for code in codes {
        let code = code.as_ref();
        match find_union(code) {
            Some(union) if !unions.contains(&union) => unions.push(union),
            Some(_) => {}
            None => tracing::warn!(code, "Unknown union code"),
        }
    }

    if unions.is_empty() {
        return Err(ScraperError::NoRegions);
    }
    Ok(unions)
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub sportsmanager_url: String,
    pub rseq_url: String,
    pub timeout: Duration,
    pub output_dir: PathBuf,
}

impl ScraperConfig {
    pub fn from_env() -> Result<Self> {
        let sportsmanager_url = std::env::var("SPORTSMANAGER_API_URL")
            .unwrap_or_else(|_| SPORTSMANAGER_API_URL.into());

        let rseq_url = std::env::var("RSEQ_API_URL").unwrap_or_else(|_| RSEQ_API_URL.into());

        let timeout_secs = match std::env::var("SCRAPER_HTTP_TIMEOUT_SECS") {
            Ok(v) => v.parse().map_err(|_| {
                ScraperError::Config(format!("SCRAPER_HTTP_TIMEOUT_SECS is not a number: {v}"))
            })?,
            Err(_) => HTTP_TIMEOUT_SECS,
        };

        let output_dir = std::env::var("SCRAPER_OUTPUT_DIR")
            .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.into())
            .into();

        Ok(Self {
            sportsmanager_url,
            rseq_url,
            timeout: Duration::from_secs(timeout_secs),
            output_dir,
        })
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            sportsmanager_url: SPORTSMANAGER_API_URL.into(),
            rseq_url: RSEQ_API_URL.into(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
        }
    }
}
