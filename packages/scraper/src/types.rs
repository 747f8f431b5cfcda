//! Core data types for the scraper.
//!
//! Upstream records stay as JSON objects (`serde_json::Map`) so that fields
//! the normalizers do not touch pass through unchanged. Everything the
//! pipeline itself produces is typed.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// A JSON object as delivered by a feed.
pub type Record = Map<String, Value>;

/// A provincial rugby union on the union feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Union {
    /// Provider identifier (`user_id` on the feed).
    pub id: u32,

    /// Short code (e.g., "QC").
    pub code: &'static str,
}

/// A competition from the season listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Competition {
    /// Competition identifier (`fixtureid`), stringified.
    pub id: String,

    /// Trimmed display name.
    pub name: String,

    /// Upstream entry with presentation fields removed.
    pub record: Record,
}

/// Raw fixtures and table rows for one competition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueTable {
    pub fixtures: Vec<Record>,
    pub table: Vec<Record>,
}

/// A club on the union feed, shared by every team it fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Club {
    pub name: String,
    pub logo: String,
    pub team_ids: Vec<Value>,
}

/// The four canonical documents for one region and season.
///
/// Documents are keyed maps in feed order: leagues as listed, clubs as first
/// seen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSet<C, F, S> {
    pub leagues: IndexMap<String, String>,
    pub clubs: IndexMap<String, C>,
    pub fixtures: IndexMap<String, Vec<F>>,
    pub standings: IndexMap<String, Vec<S>>,
}

impl<C, F, S> DocumentSet<C, F, S> {
    /// Create an empty document set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            leagues: IndexMap::new(),
            clubs: IndexMap::new(),
            fixtures: IndexMap::new(),
            standings: IndexMap::new(),
        }
    }
}

impl<C, F, S> Default for DocumentSet<C, F, S> {
    fn default() -> Self {
        Self::new()
    }
}
