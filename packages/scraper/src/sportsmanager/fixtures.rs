//! Fixture normalization.
//!
//! The feed delivers fixtures as flat records (`homeScore`, `awayTeamId`,
//! ...). The canonical shape groups each side into a `home` / `away`
//! sub-record, defaults missing scores and stats, turns `matchOfficials`
//! into a list and drops presentation fields.

use serde_json::{json, Value};

use crate::json::{is_blank, key_string, or_empty};
use crate::types::Record;

/// Field holding the officials mapping.
pub const MATCH_OFFICIALS: &str = "matchOfficials";

/// Field holding the competition year.
pub const COMP_YEAR: &str = "compYear";

/// Default for missing scores and discipline stats.
const ZERO: &str = "0";

/// Fields removed from every fixture. The flat home/away fields at the end
/// are replaced by the `home` / `away` sub-records.
pub const FIXTURE_PRUNED_KEYS: &[&str] = &[
    "competitionId",
    "competitionName",
    "postponed",
    "tournamentFixture",
    "sports",
    "fixtureComment",
    "competitionShortName",
    "competitionGroupId",
    "displayWLD",
    "countyName",
    "ageid",
    "ageName",
    "gender",
    "round",
    "adminnote",
    "metaData",
    "competitioncomment",
    "competitionDispResults",
    "scoreMetadata",
    "homeTeam",
    "awayTeam",
    "homeClub",
    "awayClub",
    "homeClubLogo",
    "awayClubLogo",
    "homeClubAlternateName",
    "awayClubAlternateName",
    "homeTeamComment",
    "homeTeamApproval",
    "awayTeamComment",
    "awayTeamApproval",
    "officials",
    "streaming",
    "homeTeamId",
    "homeClubId",
    "homeScore",
    "homeDrop",
    "homePen",
    "homeConv",
    "homeResult",
    "awayTeamId",
    "awayClubId",
    "awayScore",
    "awayDrop",
    "awayPen",
    "awayConv",
    "awayResult",
];

/// One side of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Prefix of the side's flat fields.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }

    fn field(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.prefix())
    }
}

/// Primary score from a score field.
///
/// Scores may carry several periods separated by `;`; only the first one
/// counts. Missing or empty scores read as `"0"`.
///
/// # Examples
/// ```
/// use rugby_scraper::sportsmanager::fixtures::primary_score;
/// use serde_json::json;
///
/// assert_eq!(primary_score(Some(&json!("12;0"))), "12");
/// assert_eq!(primary_score(Some(&json!(""))), "0");
/// assert_eq!(primary_score(None), "0");
/// ```
pub fn primary_score(value: Option<&Value>) -> String {
    if is_blank(value) {
        return ZERO.to_string();
    }
    match value {
        Some(Value::String(s)) => s.split(';').next().unwrap_or_default().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => ZERO.to_string(),
    }
}

/// Discipline stat (drop goals, penalties, conversions).
///
/// Only a missing or null stat is defaulted; a present `0` or `""` is kept.
pub fn stat_or_zero(value: Option<&Value>) -> Value {
    match value {
        None | Some(Value::Null) => Value::String(ZERO.to_string()),
        Some(v) => v.clone(),
    }
}

/// Build the `home` or `away` sub-record from the flat fields.
pub fn participant(fixture: &Record, side: Side) -> Value {
    json!({
        "team_id": fixture.get(&side.field("TeamId")).cloned().unwrap_or(Value::Null),
        "club_id": fixture.get(&side.field("ClubId")).cloned().unwrap_or(Value::Null),
        "score": primary_score(fixture.get(&side.field("Score"))),
        "drop": stat_or_zero(fixture.get(&side.field("Drop"))),
        "pen": stat_or_zero(fixture.get(&side.field("Pen"))),
        "conv": stat_or_zero(fixture.get(&side.field("Conv"))),
        "result": or_empty(fixture, &side.field("Result")),
    })
}

/// Turn the officials mapping into a `{role, name}` list.
///
/// Never fails: anything but a mapping gives an empty list, and entries
/// that are not themselves mappings are skipped.
pub fn normalize_match_officials(value: Option<&Value>) -> Vec<Value> {
    let Some(Value::Object(officials)) = value else {
        return Vec::new();
    };

    officials
        .iter()
        .filter_map(|(key, official)| match official {
            Value::Object(official) => Some(json!({
                "role": official.get("role").cloned().unwrap_or(Value::Null),
                "name": official.get("name").cloned().unwrap_or(Value::Null),
            })),
            other => {
                tracing::debug!(key = %key, value = %other, "Skipping malformed official");
                None
            }
        })
        .collect()
}

/// Derive the canonical fixture from a raw one.
///
/// Surviving fields keep their upstream order. `matchOfficials` keeps its
/// position (or goes last when absent); `home` and `away` follow the
/// surviving fields.
pub fn normalize_fixture(raw: &Record) -> Record {
    let mut officials = Some(Value::Array(normalize_match_officials(
        raw.get(MATCH_OFFICIALS),
    )));

    let mut fixture = Record::new();
    for (key, value) in raw {
        if FIXTURE_PRUNED_KEYS.contains(&key.as_str()) {
            continue;
        }
        let value = if key == MATCH_OFFICIALS {
            officials.take().unwrap_or_default()
        } else {
            value.clone()
        };
        fixture.insert(key.clone(), value);
    }

    fixture.insert("home".to_string(), participant(raw, Side::Home));
    fixture.insert("away".to_string(), participant(raw, Side::Away));

    if let Some(officials) = officials {
        fixture.insert(MATCH_OFFICIALS.to_string(), officials);
    }

    fixture
}

/// Keep the fixtures whose competition year equals `year`.
///
/// Years compare as strings, so `2026` and `"2026"` both match `"2026"`.
pub fn retain_year(fixtures: Vec<Record>, year: &str) -> Vec<Record> {
    fixtures
        .into_iter()
        .filter(|f| f.get(COMP_YEAR).and_then(key_string).as_deref() == Some(year))
        .collect()
}
