//! Adapter for the RSEQ league feed.
//!
//! One request per configured league returns teams, games and standings
//! together. Teams have no logos on the feed; those come from the
//! configuration's lookup tables.

pub mod config;
pub mod fixtures;
pub mod standings;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, ScraperError};
use crate::http::FeedSource;
use crate::json::{is_blank, key_string, records, trimmed_str};
use crate::output::RawDump;
use crate::provider::Provider;
use crate::types::{DocumentSet, Record};

pub use config::{RseqConfig, RseqLeague};
pub use fixtures::{fixture_from_game, minutes_to_hhmm, FixtureDetail, RseqFixture};
pub use standings::RseqStanding;

/// Region code of the RSEQ feed.
pub const RSEQ_REGION: &str = "rseq";

/// A team on the RSEQ feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RseqClub {
    pub name: String,
    pub code: String,
    pub pseudonym: String,
    pub logo_url: String,
}

/// Canonical documents of an RSEQ run.
pub type RseqDocuments = DocumentSet<RseqClub, RseqFixture, RseqStanding>;

/// Query parameters for one league.
pub fn league_params(league_id: &str) -> Vec<(&'static str, String)> {
    vec![("leagueId", league_id.to_string())]
}

/// The RSEQ scrape over every configured league.
#[derive(Debug, Clone)]
pub struct RseqScrape {
    config: RseqConfig,
    raw_dump: Option<RawDump>,
}

impl RseqScrape {
    #[must_use]
    pub fn new(config: RseqConfig) -> Self {
        Self {
            config,
            raw_dump: None,
        }
    }

    /// Save each league payload while scraping.
    #[must_use]
    pub fn with_raw_dump(mut self, dump: RawDump) -> Self {
        self.raw_dump = Some(dump);
        self
    }

    #[must_use]
    pub fn config(&self) -> &RseqConfig {
        &self.config
    }

    /// Read a team entry; entries without a `TeamId` yield `None`.
    pub fn club_from_team(&self, team: &Record) -> Option<(String, RseqClub)> {
        let id = team.get("TeamId");
        if is_blank(id) {
            return None;
        }
        let id = id.and_then(key_string)?;

        let club = RseqClub {
            name: trimmed_str(team, "TeamName"),
            code: trimmed_str(team, "TeamCode"),
            pseudonym: trimmed_str(team, "TeamPseudonym"),
            logo_url: self.config.logo_for(&id),
        };
        Some((id, club))
    }

    /// Fold one league payload into the documents.
    ///
    /// # Errors
    /// `ScraperError::UnexpectedPayload` when the payload is not an object.
    pub fn absorb_league(
        &self,
        docs: &mut RseqDocuments,
        league: &RseqLeague,
        payload: &Value,
    ) -> Result<()> {
        let data = payload
            .as_object()
            .ok_or_else(|| ScraperError::UnexpectedPayload {
                context: format!("RSEQ league {}", league.id),
                detail: "expected a JSON object".to_string(),
            })?;

        for team in records(data.get("Teams"), "Teams") {
            match self.club_from_team(&team) {
                // A team listed by several leagues keeps its last record.
                Some((id, club)) => {
                    docs.clubs.insert(id, club);
                }
                None => tracing::warn!(
                    league = %league.name,
                    team = ?team.get("TeamName"),
                    "Skipping team without id"
                ),
            }
        }

        let fixtures: Vec<RseqFixture> = records(data.get("RegularSeasonGames"), "RegularSeasonGames")
            .iter()
            .filter_map(fixture_from_game)
            .collect();

        let division = data
            .get("Conference")
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));
        let standings: Vec<RseqStanding> = records(data.get("Standings"), "Standings")
            .iter()
            .map(|row| RseqStanding::from_row(row, &division))
            .collect();

        tracing::debug!(
            league = %league.name,
            fixtures = fixtures.len(),
            standings = standings.len(),
            "Parsed league"
        );
        docs.fixtures.insert(league.id.clone(), fixtures);
        docs.standings.insert(league.id.clone(), standings);
        Ok(())
    }
}

impl Provider for RseqScrape {
    type Club = RseqClub;
    type Fixture = RseqFixture;
    type Standing = RseqStanding;

    fn region_code(&self) -> &str {
        RSEQ_REGION
    }

    fn collect(&self, feed: &dyn FeedSource) -> Result<RseqDocuments> {
        let mut docs = RseqDocuments::new();

        for league in &self.config.leagues {
            tracing::info!(league = %league.name, id = %league.id, "Fetching league");

            let payload = feed.fetch(&league_params(&league.id))?;
            if let Some(dump) = &self.raw_dump {
                dump.save(&format!("rseq_{}", league.id), &payload);
            }

            self.absorb_league(&mut docs, league, &payload)?;
            docs.leagues.insert(league.id.clone(), league.name.clone());
        }

        tracing::info!(clubs = docs.clubs.len(), "Extracted RSEQ teams");
        Ok(docs)
    }
}
