//! Standing rows from the `Standings` list.

use serde::Serialize;
use serde_json::Value;

use crate::json::or_empty;
use crate::types::Record;

/// A team's line in a league table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RseqStanding {
    pub team_id: Value,
    pub pos: Value,
    pub pld: Value,
    pub w: Value,
    pub d: Value,
    pub l: Value,
    pub pf: Value,
    pub pa: Value,
    pub diff: Value,
    pub tf: Value,
    pub ta: Value,
    pub td: Value,
    pub pts: Value,
    pub division: Value,
}

impl RseqStanding {
    /// Build a row; `division` is the league payload's `Conference`.
    pub fn from_row(row: &Record, division: &Value) -> Self {
        Self {
            team_id: or_empty(row, "TeamId"),
            pos: or_empty(row, "Position"),
            pld: or_empty(row, "GamesPlayed"),
            w: or_empty(row, "Wins"),
            d: or_empty(row, "Draws"),
            l: or_empty(row, "Losses"),
            pf: or_empty(row, "PointsFor"),
            // upstream spelling
            pa: or_empty(row, "PointsAgaints"),
            diff: or_empty(row, "Diff1"),
            tf: or_empty(row, "TriesFor"),
            ta: or_empty(row, "TriesAgainst"),
            td: or_empty(row, "TriesDiff"),
            pts: or_empty(row, "TotalPoints"),
            division: division.clone(),
        }
    }
}
