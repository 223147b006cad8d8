//! Scenario configuration for a targeting run.
//!
//! Analysts tune these inputs per call-planning scenario; the pipeline is
//! recomputed from scratch on every change. Loadable from pulse.toml (or
//! the path in the PULSE_CONFIG env var), YAML, or JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::entities::{CompetitorAccess, Payer, Strategy};
use crate::error::{PulseError, Result};

/// Complete scenario configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Payer that won preferred formulary status. Kept as a free-form
    /// string so identities outside the tracked set stay representable;
    /// resolved through [`Payer::from_str`] at filter time, where an
    /// unmatched identity means an unrestricted formulary filter.
    #[serde(default = "default_formulary_winner")]
    pub formulary_winner: String,

    /// Zip codes the scenario is restricted to. Empty = whole territory.
    #[serde(default)]
    pub selected_zips: Vec<String>,

    /// Maximum number of physicians the field team can cover. A hard cap
    /// on the target list; zero yields an empty target set.
    #[serde(default = "default_call_capacity")]
    pub call_capacity: usize,

    /// Messaging strategy for the scenario.
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,

    /// Competitor access in the territory, surfaced in messaging.
    #[serde(default = "default_competitor_access")]
    pub competitor_access: CompetitorAccess,
}

fn default_formulary_winner()  -> String { "uhc".to_string() }
fn default_call_capacity()     -> usize  { 25 }
fn default_strategy()          -> Strategy { Strategy::Defensive }
fn default_competitor_access() -> CompetitorAccess { CompetitorAccess::BlockedNd }

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            formulary_winner:  default_formulary_winner(),
            selected_zips:     vec![],
            call_capacity:     default_call_capacity(),
            strategy:          default_strategy(),
            competitor_access: default_competitor_access(),
        }
    }
}

impl ScenarioConfig {
    /// Resolve the configured winner to a tracked payer, if any.
    pub fn winner(&self) -> Option<Payer> {
        Payer::from_str(&self.formulary_winner)
    }

    /// Load configuration from pulse.toml.
    /// Checks PULSE_CONFIG env var first, then the current directory.
    pub fn load() -> Result<Self> {
        let path = std::env::var("PULSE_CONFIG")
            .unwrap_or_else(|_| "pulse.toml".to_string());

        if !Path::new(&path).exists() {
            return Err(PulseError::Config(format!(
                "Config file not found: {path}\n\
                 Copy pulse.example.toml to pulse.toml and edit it."
            )));
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        debug!("Loaded scenario config from {path}");
        Ok(config)
    }

    /// Load from YAML file
    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_json(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save to YAML file
    pub fn to_yaml(&self, path: &str) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScenarioConfig::default();
        assert_eq!(config.formulary_winner, "uhc");
        assert_eq!(config.winner(), Some(Payer::Uhc));
        assert!(config.selected_zips.is_empty());
        assert_eq!(config.call_capacity, 25);
        assert_eq!(config.strategy, Strategy::Defensive);
    }

    #[test]
    fn test_unknown_winner_resolves_to_none() {
        let config = ScenarioConfig {
            formulary_winner: "humana".to_string(),
            ..ScenarioConfig::default()
        };
        assert_eq!(config.winner(), None);
    }

    #[test]
    fn test_toml_parse_with_defaults() {
        let toml_src = r#"
            formulary_winner = "aetna"
            selected_zips = ["19103", "19107"]
        "#;
        let config: ScenarioConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.winner(), Some(Payer::Aetna));
        assert_eq!(config.selected_zips, vec!["19103", "19107"]);
        // Unspecified fields fall back to defaults
        assert_eq!(config.call_capacity, 25);
        assert_eq!(config.competitor_access, CompetitorAccess::BlockedNd);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ScenarioConfig {
            formulary_winner: "cigna".to_string(),
            selected_zips: vec!["19130".to_string()],
            call_capacity: 10,
            strategy: Strategy::Offensive,
            competitor_access: CompetitorAccess::OpenAccess,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ScenarioConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.formulary_winner, config.formulary_winner);
        assert_eq!(parsed.call_capacity, config.call_capacity);
        assert_eq!(parsed.strategy, config.strategy);
    }
}
