//! League list and team lookup tables for the RSEQ adapter.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ScraperError};

/// Built-in configuration shipped with the binary.
const BUILTIN_CONFIG: &str = include_str!("../../config/rseq.yaml");

/// One RSEQ league.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RseqLeague {
    pub id: String,
    pub name: String,
}

/// RSEQ adapter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RseqConfig {
    /// Leagues to scrape, in order.
    pub leagues: Vec<RseqLeague>,

    /// Team id → logo URL. The feed has no logos of its own.
    #[serde(default)]
    pub team_logos: BTreeMap<String, String>,

    /// Team id → sibling team id whose logo may stand in.
    #[serde(default)]
    pub team_aliases: BTreeMap<String, String>,
}

impl RseqConfig {
    /// The configuration embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CONFIG)
    }

    /// Load a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse a YAML configuration.
    ///
    /// # Errors
    /// `ScraperError::Config` when no league is configured.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        if config.leagues.is_empty() {
            return Err(ScraperError::Config("no RSEQ leagues configured".into()));
        }
        Ok(config)
    }

    /// Logo URL for a team; empty when neither the team nor its sibling has one.
    #[must_use]
    pub fn logo_for(&self, team_id: &str) -> String {
        self.team_logos
            .get(team_id)
            .or_else(|| {
                self.team_aliases
                    .get(team_id)
                    .and_then(|alias| self.team_logos.get(alias))
            })
            .cloned()
            .unwrap_or_default()
    }
}
