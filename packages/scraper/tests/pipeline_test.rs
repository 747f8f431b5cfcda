//! End-to-end tests for both adapters against canned feed payloads.
//!
//! The payloads under `tests/fixtures/` are trimmed copies of real feed
//! responses for one union season and one RSEQ league.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::tempdir;

use rugby_scraper::error::{Result, ScraperError};
use rugby_scraper::output::{region_dir, RawDump, DOCUMENT_FILES};
use rugby_scraper::rseq::{RseqConfig, RseqScrape};
use rugby_scraper::{run_region, FeedSource, Provider, UnionScrape, Union};

const QC: Union = Union {
    id: 14159,
    code: "QC",
};

/// Load a fixture file as JSON.
fn load_fixture(provider: &str, name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(provider)
        .join(name);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Bad JSON in {}: {}", path.display(), e))
}

fn param<'a>(params: &'a [(&str, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

/// Serves the union fixtures and records every request.
///
/// `payloads` replaces a fixture response, keyed by `groups`,
/// `competitions` or `league_<competition id>`.
#[derive(Default)]
struct UnionFeed {
    payloads: BTreeMap<String, Value>,
    requests: RefCell<Vec<String>>,
}

impl UnionFeed {
    fn new() -> Self {
        Self::default()
    }

    fn with_payload(mut self, name: &str, payload: Value) -> Self {
        self.payloads.insert(name.to_string(), payload);
        self
    }

    fn respond(&self, name: &str, fixture: &str) -> Value {
        self.payloads
            .get(name)
            .cloned()
            .unwrap_or_else(|| load_fixture("sportsmanager", fixture))
    }
}

impl FeedSource for UnionFeed {
    fn fetch(&self, params: &[(&str, String)]) -> Result<Value> {
        let kind = param(params, "type").unwrap_or_default().to_string();
        self.requests.borrow_mut().push(kind.clone());

        match kind.as_str() {
            "groups" => Ok(self.respond("groups", "seasons.json")),
            "competitions" => {
                assert_eq!(param(params, "seasonid"), Some("3839"));
                Ok(self.respond("competitions", "competitions.json"))
            }
            "league_table" => {
                let id = param(params, "competition_id").unwrap_or_default();
                Ok(self.respond(&format!("league_{id}"), &format!("league_{id}.json")))
            }
            other => Err(ScraperError::Config(format!("unexpected request type {other}"))),
        }
    }
}

/// Serves one RSEQ league payload for any league id.
struct RseqFeed;

impl FeedSource for RseqFeed {
    fn fetch(&self, params: &[(&str, String)]) -> Result<Value> {
        assert!(param(params, "leagueId").is_some());
        Ok(load_fixture("rseq", "league_univ_m.json"))
    }
}

fn read_document(dir: &Path, name: &str) -> Value {
    let text = fs::read_to_string(dir.join(name)).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_union_pipeline_documents() {
    let temp = tempdir().unwrap();
    let feed = UnionFeed::new();
    let scrape = UnionScrape::new(QC).with_target_year("2026");

    let dir = run_region(&scrape, &feed, temp.path(), "2026").unwrap();
    assert_eq!(dir, temp.path().join("qc").join("2026"));
    for name in DOCUMENT_FILES {
        assert!(dir.join(name).exists(), "missing {name}");
    }

    assert_eq!(
        *feed.requests.borrow(),
        vec!["groups", "competitions", "league_table", "league_table"]
    );

    assert_eq!(
        read_document(&dir, "leagues.json"),
        json!({"2001": "Division 1 Masculin", "2002": "Division 1 Féminin"})
    );

    assert_eq!(
        read_document(&dir, "clubs.json"),
        json!({
            "1001": {
                "name": "Montréal Wanderers",
                "logo": "https://cdn.example.org/mw.png",
                "team_ids": [5, 15]
            },
            "1002": {"name": "Québec RFC", "logo": "", "team_ids": [6]},
            "1003": {"name": "Sherbrooke", "logo": "", "team_ids": [16]}
        })
    );
}

#[test]
fn test_union_pipeline_fixtures() {
    let temp = tempdir().unwrap();
    let scrape = UnionScrape::new(QC).with_target_year("2026");
    let dir = run_region(&scrape, &UnionFeed::new(), temp.path(), "2026").unwrap();

    let fixtures = read_document(&dir, "fixtures.json");

    // 9002 belongs to 2025 and is filtered out
    let first = fixtures["2001"].as_array().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(
        first[0],
        json!({
            "fixtureID": "9001",
            "fixtureDate": "2026-05-16",
            "fixtureTime": "13:00",
            "compYear": 2026,
            "venue": "Parc Jarry",
            "matchOfficials": [{"role": "Referee", "name": "A. Martin"}],
            "home": {
                "team_id": 5, "club_id": "1001", "score": "12",
                "drop": "0", "pen": 2, "conv": "0", "result": "W"
            },
            "away": {
                "team_id": 6, "club_id": "1002", "score": "0",
                "drop": "0", "pen": "0", "conv": "0", "result": "L"
            }
        })
    );

    // Field order survives normalization
    let keys: Vec<&String> = first[0].as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec![
            "fixtureID",
            "fixtureDate",
            "fixtureTime",
            "compYear",
            "venue",
            "matchOfficials",
            "home",
            "away"
        ]
    );

    let second = &fixtures["2002"][0];
    assert_eq!(second["home"]["score"], json!("22"));
    assert_eq!(second["home"]["drop"], json!(0));
    assert_eq!(second["away"]["score"], json!("0"));
    assert_eq!(second["away"]["result"], json!(""));
    assert_eq!(second["matchOfficials"], json!([]));
}

#[test]
fn test_union_pipeline_standings() {
    let temp = tempdir().unwrap();
    let scrape = UnionScrape::new(QC).with_target_year("2026");
    let dir = run_region(&scrape, &UnionFeed::new(), temp.path(), "2026").unwrap();

    let standings = read_document(&dir, "standings.json");
    let rows = standings["2001"].as_array().unwrap();

    // Rows without a club id stay in the table
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        json!({"position": 1, "team_id": 5, "club_id": "1001", "played": 1, "points": 4})
    );
    assert_eq!(standings["2002"].as_array().unwrap().len(), 2);
}

#[test]
fn test_union_year_filter_accepts_other_year() {
    let temp = tempdir().unwrap();
    let scrape = UnionScrape::new(QC).with_target_year("2025");
    let dir = run_region(&scrape, &UnionFeed::new(), temp.path(), "2025").unwrap();

    let fixtures = read_document(&dir, "fixtures.json");
    let ids: Vec<&Value> = fixtures["2001"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| &f["fixtureID"])
        .collect();
    assert_eq!(ids, vec![&json!("9002")]);
    assert!(fixtures["2002"].as_array().unwrap().is_empty());
}

#[test]
fn test_union_pipeline_is_idempotent() {
    let temp = tempdir().unwrap();
    let scrape = UnionScrape::new(QC).with_target_year("2026");

    let dir = run_region(&scrape, &UnionFeed::new(), temp.path(), "2026").unwrap();
    let first: Vec<String> = DOCUMENT_FILES
        .iter()
        .map(|name| fs::read_to_string(dir.join(name)).unwrap())
        .collect();

    run_region(&scrape, &UnionFeed::new(), temp.path(), "2026").unwrap();
    let second: Vec<String> = DOCUMENT_FILES
        .iter()
        .map(|name| fs::read_to_string(dir.join(name)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_union_without_active_season_writes_nothing() {
    let temp = tempdir().unwrap();
    let feed = UnionFeed::new().with_payload("groups", json!({}));
    let scrape = UnionScrape::new(QC).with_target_year("2026");

    let err = run_region(&scrape, &feed, temp.path(), "2026").unwrap_err();
    assert!(matches!(err, ScraperError::NoActiveSeason { .. }));
    assert_eq!(err.to_string(), "No active season found for QC");
    assert!(!temp.path().join("qc").exists());
    assert_eq!(*feed.requests.borrow(), vec!["groups"]);
}

#[test]
fn test_union_documents_follow_feed_order() {
    let temp = tempdir().unwrap();
    let feed = UnionFeed::new()
        .with_payload(
            "competitions",
            json!({"data": {"14159": [
                {"fixtureid": 99999, "name": "Premier"},
                {"fixtureid": 204705, "name": "Second"}
            ]}}),
        )
        .with_payload(
            "league_99999",
            json!({"data": {"fixtures": [], "leagueTable": [
                {"team_id": 1, "club_id": "2000", "team": "Zulu RFC"},
                {"team_id": 2, "club_id": "1000", "team": "Alpha RFC"}
            ]}}),
        )
        .with_payload(
            "league_204705",
            json!({"data": {"fixtures": [], "leagueTable": [
                {"team_id": 3, "club_id": "1500", "team": "Mike RFC"}
            ]}}),
        );

    let scrape = UnionScrape::new(QC).with_target_year("2026");
    let dir = run_region(&scrape, &feed, temp.path(), "2026").unwrap();

    let keys = |name: &str| -> Vec<String> {
        read_document(&dir, name)
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    };
    assert_eq!(keys("leagues.json"), vec!["99999", "204705"]);
    assert_eq!(keys("fixtures.json"), vec!["99999", "204705"]);
    assert_eq!(keys("standings.json"), vec!["99999", "204705"]);
    assert_eq!(keys("clubs.json"), vec!["2000", "1000", "1500"]);
}

#[test]
fn test_raw_dump_keeps_unparseable_payload() {
    let temp = tempdir().unwrap();
    let broken = json!({"settings": {"showLiveTable": "no"}});
    let feed = UnionFeed::new().with_payload("league_2002", broken.clone());

    let dir = region_dir(temp.path(), "QC", "2026");
    let scrape = UnionScrape::new(QC)
        .with_target_year("2026")
        .with_raw_dump(RawDump::new(&dir));

    let err = run_region(&scrape, &feed, temp.path(), "2026").unwrap_err();
    assert!(matches!(err, ScraperError::UnexpectedPayload { .. }));

    // Every response is saved as received, including the one that failed
    let raw = dir.join("raw");
    assert_eq!(read_document(&raw, "league_2002.json"), broken);
    assert_eq!(
        read_document(&raw, "seasons.json"),
        load_fixture("sportsmanager", "seasons.json")
    );
    assert_eq!(
        read_document(&raw, "competitions.json"),
        load_fixture("sportsmanager", "competitions.json")
    );
    assert_eq!(
        read_document(&raw, "league_2001.json"),
        load_fixture("sportsmanager", "league_2001.json")
    );

    // The failed region gets no documents, only its dumps
    for name in DOCUMENT_FILES {
        assert!(!dir.join(name).exists(), "unexpected {name}");
    }
}

#[test]
fn test_rseq_pipeline() {
    let temp = tempdir().unwrap();
    let config_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("rseq")
        .join("config.yaml");
    let scrape = RseqScrape::new(RseqConfig::from_file(&config_path).unwrap());
    assert_eq!(scrape.region_code(), "rseq");

    let dir = run_region(&scrape, &RseqFeed, temp.path(), "2026").unwrap();
    assert_eq!(dir, temp.path().join("rseq").join("2026"));

    let league = "c80803ae-8c87-4619-8d76-3eda0fdf2d27";
    assert_eq!(
        read_document(&dir, "leagues.json"),
        json!({league: "Universitaire Masculin"})
    );

    let clubs = read_document(&dir, "clubs.json");
    assert_eq!(
        clubs,
        json!({
            "559d4c83-3b88-489f-a343-62e84f44a5df": {
                "name": "Carabins",
                "code": "UDM",
                "pseudonym": "Carabins",
                "logo_url": "https://cdn.example.org/carabins.png"
            },
            "effba245-ab6c-4f22-9897-c32c8a2cd59f": {
                "name": "McGill",
                "code": "MCG",
                "pseudonym": "Redbirds",
                "logo_url": "https://cdn.example.org/carabins.png"
            }
        })
    );

    let fixtures = read_document(&dir, "fixtures.json");
    assert_eq!(
        fixtures[league],
        json!([
            {
                "home_id": "559d4c83-3b88-489f-a343-62e84f44a5df",
                "away_id": "effba245-ab6c-4f22-9897-c32c8a2cd59f",
                "date": "2026-09-05",
                "time": "13:30",
                "home_score": 31,
                "away_score": 12
            },
            {
                "home_id": "effba245-ab6c-4f22-9897-c32c8a2cd59f",
                "away_id": "559d4c83-3b88-489f-a343-62e84f44a5df",
                "date": "2026-09-19",
                "time": "19:00",
                "venue": "Molson Stadium"
            }
        ])
    );

    let standings = read_document(&dir, "standings.json");
    assert_eq!(standings[league][1]["diff"], json!(-19));
    assert_eq!(standings[league][1]["pa"], json!(31));
    assert_eq!(standings[league][0]["division"], json!("Universitaire Masculin"));
}
