//! League table payload for one competition.
//!
//! The payload also carries `settings`, `liveLeagueTable` and
//! `pendingTeams`. Those only matter for live display and are never read.

use serde_json::Value;

use crate::error::{Result, ScraperError};
use crate::json::records;
use crate::types::LeagueTable;

/// Query parameters for a competition's league table.
pub fn league_table_params(competition_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("feedType", "fixture".to_string()),
        ("competition_id", competition_id.to_string()),
        ("type", "league_table".to_string()),
    ]
}

/// Extract fixtures and table rows from a league table payload.
///
/// # Errors
/// `ScraperError::UnexpectedPayload` when the payload has no `data` object.
pub fn parse_league_table(payload: &Value, competition_id: &str) -> Result<LeagueTable> {
    let data = payload
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| ScraperError::UnexpectedPayload {
            context: format!("league table {competition_id}"),
            detail: "missing data object".to_string(),
        })?;

    Ok(LeagueTable {
        fixtures: records(data.get("fixtures"), "fixtures"),
        table: records(data.get("leagueTable"), "leagueTable"),
    })
}
