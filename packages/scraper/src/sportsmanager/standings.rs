//! Standings cleanup.
//!
//! The feed shares one table schema across sports, so rugby rows carry
//! columns for goals, sets, innings and so on. Those are dropped; nothing
//! else about the row changes.

use crate::json::without_keys;
use crate::types::Record;

/// Columns removed from every table row.
pub const TABLE_PRUNED_KEYS: &[&str] = &[
    "club_logo",
    "team",
    "goalsFor",
    "goalsAgainst",
    "goalsDifference",
    "bonusPointsM",
    "teamDeduction",
    "setQuotient",
    "scoresFor",
    "scoresAgainst",
    "scoredraw",
    "scorelessdraw",
    "scoreRatio",
    "3-0",
    "3-1",
    "3-2",
    "2-3",
    "1-3",
    "0-3",
    "gamesBehind",
    "fpp",
    "fieldingpoints",
    "inningsbatted",
    "inningsfielded",
    "runrate",
];

/// Clean one table row.
pub fn clean_row(row: &Record) -> Record {
    without_keys(row, TABLE_PRUNED_KEYS)
}
