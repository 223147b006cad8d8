//! Aggregate scenario metrics.
//! Constants and their commercial assumptions are documented in
//! ARCHITECTURE.md §4.

use serde::{Deserialize, Serialize};

use pulse_common::entities::PhysicianRecord;

/// Assumed conversion of formulary access into incremental prescription
/// volume across the target set.
pub const PULL_THROUGH_RATE: f64 = 0.15;

/// Modeled net revenue per incremental script, in USD.
pub const REVENUE_PER_SCRIPT: f64 = 500.0;

/// Headline metrics for a targeting run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetingSummary {
    pub target_count: usize,
    /// Estimated incremental TRx across the target set.
    pub potential_lift: f64,
    /// Estimated revenue impact in USD.
    pub revenue_impact: f64,
}

impl TargetingSummary {
    pub fn compute(targets: &[PhysicianRecord]) -> Self {
        let total_volume: u64 = targets.iter().map(|p| p.trx_volume as u64).sum();
        let potential_lift = total_volume as f64 * PULL_THROUGH_RATE;

        Self {
            target_count: targets.len(),
            potential_lift,
            revenue_impact: potential_lift * REVENUE_PER_SCRIPT,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_test_utils::physician;

    #[test]
    fn test_summary_exact_values() {
        let targets = vec![physician("Dr. A. Smith", "19103", 100, (0.9, 0.1, 0.1))];
        let summary = TargetingSummary::compute(&targets);

        assert_eq!(summary.target_count, 1);
        assert_eq!(summary.potential_lift, 15.0);
        assert_eq!(summary.revenue_impact, 7500.0);
    }

    #[test]
    fn test_empty_target_set_is_all_zero() {
        let summary = TargetingSummary::compute(&[]);
        assert_eq!(summary.target_count, 0);
        assert_eq!(summary.potential_lift, 0.0);
        assert_eq!(summary.revenue_impact, 0.0);
    }

    #[test]
    fn test_revenue_is_lift_times_rate() {
        let targets = vec![
            physician("Dr. A. Smith", "19103", 120, (0.9, 0.1, 0.1)),
            physician("Dr. B. Johnson", "19104", 333, (0.8, 0.1, 0.1)),
        ];
        let summary = TargetingSummary::compute(&targets);
        assert_eq!(summary.potential_lift, (120.0 + 333.0) * PULL_THROUGH_RATE);
        assert_eq!(summary.revenue_impact, summary.potential_lift * REVENUE_PER_SCRIPT);
    }
}
