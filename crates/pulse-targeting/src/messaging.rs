//! Rep messaging selection.
//!
//! A two-state machine keyed on the scenario strategy: Defensive protects
//! existing volume after a competitor gains access, Offensive converts a
//! formulary win into switches. Pure text generation — never affects
//! target membership.

use serde::{Deserialize, Serialize};

use pulse_common::entities::{CompetitorAccess, Strategy};
use pulse_common::scenario::ScenarioConfig;

/// Placeholder used when the target set is empty.
pub const GENERIC_PHYSICIAN: &str = "Target Physician";

/// Rendered call messaging for the scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallMessage {
    pub strategy: Strategy,
    pub title: String,
    pub primary: String,
    pub context: String,
    pub action: String,
    /// Pull-through driver the talking points assume.
    pub competitor_access: CompetitorAccess,
}

/// Select and render the message template for the configured strategy,
/// anchored on the top-ranked physician in the target set.
pub fn select_message(config: &ScenarioConfig, top_physician: Option<&str>) -> CallMessage {
    let name = top_physician.unwrap_or(GENERIC_PHYSICIAN);

    match config.strategy {
        Strategy::Offensive => CallMessage {
            strategy: Strategy::Offensive,
            title: "Offensive Strategy: Switch Opportunity".to_string(),
            primary: "Great news! We have secured Preferred Status. This removes the PA \
                      hurdle for your new patients."
                .to_string(),
            context: format!(
                "{name} is a high-volume prescriber of the competitor, likely due to \
                 previous access barriers."
            ),
            action: "Ask for the next 3 new patient starts. Highlight the simplified \
                     intake form and hub support."
                .to_string(),
            competitor_access: config.competitor_access,
        },
        Strategy::Defensive => CallMessage {
            strategy: Strategy::Defensive,
            title: "Defensive Strategy: Protect Volume".to_string(),
            primary: "Clinical stability is paramount. Don't let a formulary change \
                      disrupt your patients' success."
                .to_string(),
            context: format!(
                "Competitor X has gained access. {name} has stable patients who may be \
                 targeted for switching."
            ),
            action: "Review 'Clinical Efficacy' data. Remind them that existing patients \
                     are grandfathered and do NOT need to switch."
                .to_string(),
            competitor_access: config.competitor_access,
        },
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn config(strategy: Strategy) -> ScenarioConfig {
        ScenarioConfig {
            strategy,
            ..ScenarioConfig::default()
        }
    }

    #[test]
    fn test_offensive_template() {
        let msg = select_message(&config(Strategy::Offensive), Some("Dr. B. Johnson"));
        assert_eq!(msg.title, "Offensive Strategy: Switch Opportunity");
        assert!(msg.context.starts_with("Dr. B. Johnson"));
        assert!(msg.primary.contains("Preferred Status"));
    }

    #[test]
    fn test_defensive_template() {
        let msg = select_message(&config(Strategy::Defensive), Some("Dr. A. Smith"));
        assert_eq!(msg.title, "Defensive Strategy: Protect Volume");
        assert!(msg.context.contains("Dr. A. Smith"));
        assert!(msg.action.contains("grandfathered"));
    }

    #[test]
    fn test_empty_target_set_uses_placeholder() {
        let msg = select_message(&config(Strategy::Offensive), None);
        assert!(msg.context.starts_with(GENERIC_PHYSICIAN));
    }

    #[test]
    fn test_competitor_access_is_carried() {
        let cfg = ScenarioConfig {
            strategy: Strategy::Defensive,
            competitor_access: CompetitorAccess::PaRequired,
            ..ScenarioConfig::default()
        };
        let msg = select_message(&cfg, None);
        assert_eq!(msg.competitor_access, CompetitorAccess::PaRequired);
    }
}
