//! Club registry built from league table rows.
//!
//! A club fields one team per competition, so the same club shows up in
//! many tables with different team ids. The registry keys clubs by club id
//! and collects every team id seen for it. The first sighting fixes the name
//! and logo.

use indexmap::IndexMap;
use serde_json::Value;

use crate::json::{is_blank, key_string, trimmed_str};
use crate::types::{Club, Record};

/// Club fields read from one league table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubSighting {
    pub club_key: String,
    pub team_id: Value,
    pub name: String,
    pub logo: String,
}

impl ClubSighting {
    /// Read a table row. Rows without a team id or club id yield `None`.
    pub fn from_row(row: &Record) -> Option<Self> {
        let team_id = row.get("team_id");
        let club_id = row.get("club_id");
        if is_blank(team_id) || is_blank(club_id) {
            return None;
        }

        Some(Self {
            club_key: club_id.and_then(key_string)?,
            team_id: team_id.cloned()?,
            name: trimmed_str(row, "team"),
            logo: trimmed_str(row, "club_logo"),
        })
    }
}

/// Deduplicated clubs for one region run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubRegistry {
    clubs: IndexMap<String, Club>,
}

impl ClubRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one sighting.
    ///
    /// An unknown club is created with the sighting's name and logo. A known
    /// club only gains the team id, and only if it is new.
    pub fn merge(&mut self, sighting: ClubSighting) {
        let club = self
            .clubs
            .entry(sighting.club_key)
            .or_insert_with(|| Club {
                name: sighting.name,
                logo: sighting.logo,
                team_ids: Vec::new(),
            });

        if !club.team_ids.contains(&sighting.team_id) {
            club.team_ids.push(sighting.team_id);
        }
    }

    /// Merge every identifiable row of a league table.
    ///
    /// # Returns
    /// Number of rows skipped for missing ids.
    pub fn observe_table(&mut self, rows: &[Record]) -> usize {
        tracing::debug!(rows = rows.len(), "Parsing league table entries");

        let mut skipped = 0;
        for row in rows {
            match ClubSighting::from_row(row) {
                Some(sighting) => self.merge(sighting),
                None => {
                    tracing::warn!(
                        team_id = ?row.get("team_id"),
                        club_id = ?row.get("club_id"),
                        "Skipping table entry with missing ids"
                    );
                    skipped += 1;
                }
            }
        }

        tracing::debug!(clubs = self.clubs.len(), "Unique clubs so far");
        skipped
    }

    #[must_use]
    pub fn get(&self, club_key: &str) -> Option<&Club> {
        self.clubs.get(club_key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Finish the run and hand over the clubs document.
    #[must_use]
    pub fn into_clubs(self) -> IndexMap<String, Club> {
        self.clubs
    }
}
