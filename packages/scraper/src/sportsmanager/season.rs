//! Active season lookup.

use serde_json::Value;

use crate::error::{Result, ScraperError};
use crate::json::key_string;
use crate::types::Union;

/// Value of the `active` marker on the current season.
const ACTIVE: &str = "yes";

/// Query parameters for a union's season listing.
pub fn season_params(union: &Union) -> Vec<(&'static str, String)> {
    vec![
        ("feedType", "competitions".to_string()),
        ("user_id", union.id.to_string()),
        ("type", "groups".to_string()),
    ]
}

/// Season entries from a listing payload (`settings.season.<union id>.year`).
pub fn season_entries<'a>(payload: &'a Value, union: &Union) -> &'a [Value] {
    payload
        .get("settings")
        .and_then(|s| s.get("season"))
        .and_then(|s| s.get(union.id.to_string()))
        .and_then(|s| s.get("year"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Id of the first season marked active in a listing payload.
pub fn active_season(payload: &Value, union: &Union) -> Option<String> {
    let seasons = season_entries(payload, union);
    tracing::debug!(union = union.code, seasons = seasons.len(), "Found seasons");

    seasons
        .iter()
        .find(|s| s.get("active").and_then(Value::as_str) == Some(ACTIVE))
        .and_then(|s| s.get("seasonid"))
        .and_then(key_string)
}

/// Active season id of a listing payload.
///
/// # Errors
/// `ScraperError::NoActiveSeason` when no season is active.
pub fn require_active_season(payload: &Value, union: &Union) -> Result<String> {
    let season_id = active_season(payload, union).ok_or_else(|| ScraperError::NoActiveSeason {
        region: union.code.to_string(),
    })?;

    tracing::info!(union = union.code, season = %season_id, "Active season");
    Ok(season_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const QC: Union = Union { id: 14159, code: "QC" };

    fn listing(years: Value) -> Value {
        json!({"settings": {"season": {"14159": {"year": years}}}})
    }

    #[test]
    fn test_active_season() {
        let payload = listing(json!([
            {"seasonid": "3700", "active": "no"},
            {"seasonid": "3839", "active": "yes"},
            {"seasonid": "3900", "active": "yes"},
        ]));
        assert_eq!(active_season(&payload, &QC), Some("3839".to_string()));
    }

    #[test]
    fn test_active_season_numeric_id() {
        let payload = listing(json!([{"seasonid": 3839, "active": "yes"}]));
        assert_eq!(active_season(&payload, &QC), Some("3839".to_string()));
    }

    #[test]
    fn test_active_marker_must_be_literal_yes() {
        let payload = listing(json!([
            {"seasonid": "1", "active": true},
            {"seasonid": "2", "active": "Yes"},
            {"seasonid": "3", "active": 1},
        ]));
        assert_eq!(active_season(&payload, &QC), None);
    }

    #[test]
    fn test_no_seasons() {
        assert_eq!(active_season(&listing(json!([])), &QC), None);
        assert_eq!(active_season(&json!({}), &QC), None);
        assert_eq!(active_season(&json!({"settings": {"season": {}}}), &QC), None);
    }

    #[test]
    fn test_other_union_listing_is_ignored() {
        let payload = json!({"settings": {"season": {"13329": {"year": [
            {"seasonid": "1", "active": "yes"}
        ]}}}});
        assert_eq!(active_season(&payload, &QC), None);
    }

    #[test]
    fn test_require_active_season() {
        let payload = listing(json!([{"seasonid": "3839", "active": "yes"}]));
        assert_eq!(require_active_season(&payload, &QC).unwrap(), "3839");

        let err = require_active_season(&listing(json!([])), &QC).unwrap_err();
        assert!(matches!(err, ScraperError::NoActiveSeason { .. }));
    }

    #[test]
    fn test_season_params() {
        let params = season_params(&QC);
        assert_eq!(
            params,
            vec![
                ("feedType", "competitions".to_string()),
                ("user_id", "14159".to_string()),
                ("type", "groups".to_string()),
            ]
        );
    }
}
