//! Competition listing for a season.

use serde_json::Value;

use crate::json::{is_blank, key_string, records, without_keys};
use crate::types::{Competition, Record, Union};

/// Presentation and administrative fields removed from each listing entry.
pub const COMPETITION_PRUNED_KEYS: &[&str] = &[
    "shortname",
    "compLogo",
    "Description",
    "groupid",
    "seasonid",
    "type",
    "gender",
    "displayStats",
    "organisationType",
    "competitionLevel",
    "teamType",
    "comment",
    "sportid",
    "sport",
];

/// Query parameters for a union's competitions in one season.
pub fn competition_params(union: &Union, season_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("feedType", "competitions".to_string()),
        ("type", "competitions".to_string()),
        ("user_id", union.id.to_string()),
        ("seasonid", season_id.to_string()),
    ]
}

/// Read one listing entry.
///
/// Listings contain placeholder rows; entries without an id or a name
/// yield `None`.
pub fn competition_from_entry(entry: &Record) -> Option<Competition> {
    let id = entry.get("fixtureid");
    if is_blank(id) {
        return None;
    }
    let id = id.and_then(key_string)?;

    let name = entry.get("name").and_then(Value::as_str)?.trim();
    if name.is_empty() {
        return None;
    }

    Some(Competition {
        id,
        name: name.to_string(),
        record: without_keys(entry, COMPETITION_PRUNED_KEYS),
    })
}

/// Competitions from a listing payload (`data.<union id>`), in listing order.
pub fn parse_competitions(payload: &Value, union: &Union) -> Vec<Competition> {
    let entries = records(
        payload
            .get("data")
            .and_then(|d| d.get(union.id.to_string())),
        "competition listing",
    );

    let competitions: Vec<Competition> = entries
        .iter()
        .filter_map(|entry| {
            let competition = competition_from_entry(entry);
            if competition.is_none() {
                tracing::warn!(
                    fixtureid = ?entry.get("fixtureid"),
                    name = ?entry.get("name"),
                    "Skipping competition without id or name"
                );
            }
            competition
        })
        .collect();

    tracing::info!(
        union = union.code,
        competitions = competitions.len(),
        "Loaded competitions"
    );
    competitions
}
