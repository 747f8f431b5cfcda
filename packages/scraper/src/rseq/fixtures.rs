//! Fixture extraction from `RegularSeasonGames`.

use serde::Serialize;
use serde_json::Value;

use crate::json::{is_set, or_empty};
use crate::types::Record;

/// Render minutes since midnight as `HH:MM`.
///
/// Only integers convert; anything else yields an empty string.
///
/// # Examples
/// ```
/// use rugby_scraper::rseq::minutes_to_hhmm;
/// use serde_json::json;
///
/// assert_eq!(minutes_to_hhmm(Some(&json!(810))), "13:30");
/// assert_eq!(minutes_to_hhmm(Some(&json!("810"))), "");
/// ```
pub fn minutes_to_hhmm(value: Option<&Value>) -> String {
    match value.and_then(Value::as_i64) {
        Some(minutes) => format!(
            "{:02}:{:02}",
            minutes.div_euclid(60),
            minutes.rem_euclid(60)
        ),
        None => String::new(),
    }
}

/// A fixture on the RSEQ feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RseqFixture {
    pub home_id: Value,
    pub away_id: Value,
    pub date: Value,
    pub time: String,
    #[serde(flatten)]
    pub detail: FixtureDetail,
}

/// Score for a game submitted to the standings, venue otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FixtureDetail {
    Played { home_score: Value, away_score: Value },
    Pending { venue: Value },
}

/// Build a fixture from a game entry.
///
/// Games whose date and time were both modified are rescheduled
/// placeholders and yield `None`.
pub fn fixture_from_game(game: &Record) -> Option<RseqFixture> {
    if is_set(game.get("IsDateModified")) && is_set(game.get("IsTimeModified")) {
        tracing::debug!(game = ?game.get("GameId"), "Skipping rescheduled game");
        return None;
    }

    let detail = if is_set(game.get("IsSubmittedForStandings")) {
        FixtureDetail::Played {
            home_score: or_empty(game, "HomeTeamScore"),
            away_score: or_empty(game, "VisitingTeamScore"),
        }
    } else {
        FixtureDetail::Pending {
            venue: or_empty(game, "SportFacilityDescription"),
        }
    };

    Some(RseqFixture {
        home_id: or_empty(game, "HomeTeamId"),
        away_id: or_empty(game, "VisitingTeamId"),
        date: or_empty(game, "GameDateText"),
        time: minutes_to_hhmm(game.get("GameTime")),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn game(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test games are objects"),
        }
    }

    #[test]
    fn test_minutes_to_hhmm() {
        assert_eq!(minutes_to_hhmm(Some(&json!(0))), "00:00");
        assert_eq!(minutes_to_hhmm(Some(&json!(65))), "01:05");
        assert_eq!(minutes_to_hhmm(Some(&json!(1170))), "19:30");
        assert_eq!(minutes_to_hhmm(Some(&json!(-30))), "-1:30");
    }

    #[test]
    fn test_non_integer_time_is_empty() {
        assert_eq!(minutes_to_hhmm(None), "");
        assert_eq!(minutes_to_hhmm(Some(&json!(null))), "");
        assert_eq!(minutes_to_hhmm(Some(&json!(""))), "");
        assert_eq!(minutes_to_hhmm(Some(&json!(90.5))), "");
    }

    #[test]
    fn test_played_fixture() {
        let fixture = fixture_from_game(&game(json!({
            "HomeTeamId": "h",
            "VisitingTeamId": "a",
            "GameDateText": "2026-09-12",
            "GameTime": 780,
            "IsSubmittedForStandings": true,
            "HomeTeamScore": 24,
            "VisitingTeamScore": 17,
            "SportFacilityDescription": "Stade"
        })))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&fixture).unwrap(),
            json!({
                "home_id": "h",
                "away_id": "a",
                "date": "2026-09-12",
                "time": "13:00",
                "home_score": 24,
                "away_score": 17
            })
        );
    }

    #[test]
    fn test_pending_fixture() {
        let fixture = fixture_from_game(&game(json!({
            "HomeTeamId": "h",
            "VisitingTeamId": "a",
            "IsSubmittedForStandings": false,
            "SportFacilityDescription": "Terrain 2"
        })))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&fixture).unwrap(),
            json!({
                "home_id": "h",
                "away_id": "a",
                "date": "",
                "time": "",
                "venue": "Terrain 2"
            })
        );
    }

    #[test]
    fn test_played_fixture_without_scores() {
        let fixture =
            fixture_from_game(&game(json!({"IsSubmittedForStandings": true}))).unwrap();
        assert_eq!(
            fixture.detail,
            FixtureDetail::Played {
                home_score: json!(""),
                away_score: json!("")
            }
        );
    }

    #[test]
    fn test_rescheduled_game_is_omitted() {
        let both = game(json!({"IsDateModified": true, "IsTimeModified": true}));
        assert_eq!(fixture_from_game(&both), None);

        let date_only = game(json!({"IsDateModified": true, "IsTimeModified": false}));
        assert!(fixture_from_game(&date_only).is_some());

        let time_only = game(json!({"IsTimeModified": true}));
        assert!(fixture_from_game(&time_only).is_some());
    }
}
