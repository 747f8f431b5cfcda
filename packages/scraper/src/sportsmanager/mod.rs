//! Adapter for the provincial union feed.
//!
//! A union run walks season → competitions → league tables. Every
//! competition contributes its fixtures and standings; clubs accumulate
//! across all competitions of the union.

pub mod clubs;
pub mod competitions;
pub mod fixtures;
pub mod league_table;
pub mod season;
pub mod standings;

use serde_json::Value;

use crate::error::Result;
use crate::http::FeedSource;
use crate::output::RawDump;
use crate::provider::Provider;
use crate::types::{Club, DocumentSet, Record, Union};

pub use clubs::{ClubRegistry, ClubSighting};
pub use competitions::{competition_params, parse_competitions};
pub use fixtures::{normalize_fixture, normalize_match_officials, retain_year};
pub use league_table::{league_table_params, parse_league_table};
pub use season::{require_active_season, season_params};
pub use standings::clean_row;

/// Canonical documents of a union run.
pub type UnionDocuments = DocumentSet<Club, Record, Record>;

/// One union's scrape.
#[derive(Debug, Clone)]
pub struct UnionScrape {
    union: Union,
    target_year: Option<String>,
    raw_dump: Option<RawDump>,
}

impl UnionScrape {
    #[must_use]
    pub fn new(union: Union) -> Self {
        Self {
            union,
            target_year: None,
            raw_dump: None,
        }
    }

    /// Only keep fixtures of this competition year.
    #[must_use]
    pub fn with_target_year(mut self, year: impl Into<String>) -> Self {
        self.target_year = Some(year.into());
        self
    }

    /// Save every feed response while scraping.
    #[must_use]
    pub fn with_raw_dump(mut self, dump: RawDump) -> Self {
        self.raw_dump = Some(dump);
        self
    }

    #[must_use]
    pub fn union(&self) -> &Union {
        &self.union
    }

    /// Save a feed response as received, before it is parsed.
    fn dump(&self, name: &str, payload: &Value) {
        if let Some(dump) = &self.raw_dump {
            dump.save(name, payload);
        }
    }
}

impl Provider for UnionScrape {
    type Club = Club;
    type Fixture = Record;
    type Standing = Record;

    fn region_code(&self) -> &str {
        self.union.code
    }

    fn collect(&self, feed: &dyn FeedSource) -> Result<UnionDocuments> {
        let payload = feed.fetch(&season_params(&self.union))?;
        self.dump("seasons", &payload);
        let season_id = require_active_season(&payload, &self.union)?;

        let payload = feed.fetch(&competition_params(&self.union, &season_id))?;
        self.dump("competitions", &payload);
        let competitions = parse_competitions(&payload, &self.union);

        let mut registry = ClubRegistry::new();
        let mut docs = UnionDocuments::new();

        for competition in competitions {
            tracing::info!(
                union = self.union.code,
                competition = %competition.name,
                id = %competition.id,
                "Fetching competition"
            );

            let payload = feed.fetch(&league_table_params(&competition.id))?;
            self.dump(&format!("league_{}", competition.id), &payload);
            let table = parse_league_table(&payload, &competition.id)?;

            registry.observe_table(&table.table);

            let fixtures: Vec<Record> = table.fixtures.iter().map(normalize_fixture).collect();
            let fixtures = match &self.target_year {
                Some(year) => retain_year(fixtures, year),
                None => fixtures,
            };
            let standings: Vec<Record> = table.table.iter().map(clean_row).collect();

            docs.fixtures.insert(competition.id.clone(), fixtures);
            docs.standings.insert(competition.id.clone(), standings);
            docs.leagues.insert(competition.id, competition.name);
        }

        tracing::info!(union = self.union.code, clubs = registry.len(), "Extracted clubs");
        docs.clubs = registry.into_clubs();
        Ok(docs)
    }
}
