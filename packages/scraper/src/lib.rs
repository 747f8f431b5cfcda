//! Rugby Scraper - Collect Canadian rugby league data from public feeds.
//!
//! This crate pulls leagues, clubs, fixtures and standings for the
//! provincial rugby unions and the Quebec student leagues (RSEQ), and
//! writes them as four JSON documents per region and season.
//!
//! # Example
//!
//! ```
//! use rugby_scraper::config;
//!
//! // Validate a season year and resolve union codes
//! assert!(config::validate_year("2026").is_ok());
//! let unions = config::resolve_unions(&["qc", "BC"]).unwrap();
//! assert_eq!(unions[0].code, "QC");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Feed URLs, union table and validation
//! - [`types`]: Core data types (Union, Competition, Club, DocumentSet)
//! - [`error`]: Error types and Result alias
//! - [`http`]: Feed client
//! - [`json`]: Helpers for loosely typed feed JSON
//! - [`provider`]: Common adapter capability
//! - [`sportsmanager`]: Provincial union feed adapter
//! - [`rseq`]: RSEQ league feed adapter
//! - [`output`]: JSON document output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod json;
pub mod output;
pub mod provider;
pub mod rseq;
pub mod sportsmanager;
pub mod types;

// Re-export main entry points
pub use provider::{run_region, Provider};
pub use rseq::{RseqConfig, RseqScrape};
pub use sportsmanager::UnionScrape;

// Re-export commonly used items
pub use config::{resolve_unions, validate_year, ScraperConfig};
pub use error::{Result, ScraperError};
pub use http::{FeedSource, HttpFeed};
pub use types::{Club, DocumentSet, Record, Union};
