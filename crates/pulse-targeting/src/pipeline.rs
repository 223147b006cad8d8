//! Target selection pipeline.
//!
//! A chain of boolean masks over the roster — formulary share, then
//! geography — followed by a hard capacity cap on the volume-ranked
//! survivors. Recomputed in full on every configuration change; no
//! caching, no incremental state. See ARCHITECTURE.md §3.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use pulse_common::entities::{Payer, PhysicianRecord};
use pulse_common::scenario::ScenarioConfig;

use crate::messaging::{select_message, CallMessage};
use crate::metrics::TargetingSummary;
use crate::payer_mix::PayerMix;

/// Share of a physician's volume the winning payer must hold before a
/// formulary win translates into a workable pull-through opportunity.
/// Strict: exactly 0.5 does not qualify.
pub const FORMULARY_SHARE_THRESHOLD: f64 = 0.5;

/// Geospatial marker for a roster record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Target,
    Other,
}

/// One plotted point in the geospatial view.
///
/// Every roster record appears here, including candidates dropped by the
/// capacity cap — those render as `Other` alongside physicians that never
/// passed the filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPoint {
    pub name: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub trx_volume: u32,
    pub marker: Marker,
}

/// Full output of a targeting run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetingResult {
    /// Ranked call list: volume descending, roster order on ties.
    pub targets: Vec<PhysicianRecord>,
    pub summary: TargetingSummary,
    /// None when the target set is empty.
    pub payer_mix: Option<PayerMix>,
    pub map_points: Vec<MapPoint>,
    pub message: CallMessage,
}

/// Run the full targeting pipeline.
///
/// Degenerate inputs — empty roster, unmatched formulary winner, zero
/// capacity — produce well-defined empty results, never an error.
pub fn compute_targets(roster: &[PhysicianRecord], config: &ScenarioConfig) -> TargetingResult {
    let winner = config.winner();

    let mut candidates: Vec<&PhysicianRecord> = roster
        .iter()
        .filter(|p| passes_formulary(p, winner))
        .filter(|p| passes_geography(p, &config.selected_zips))
        .collect();

    debug!(
        "{} of {} physicians survive formulary + geography filters",
        candidates.len(),
        roster.len()
    );

    // Volume descending; sort_by is stable, so ties keep roster order.
    candidates.sort_by(|a, b| b.trx_volume.cmp(&a.trx_volume));
    candidates.truncate(config.call_capacity);

    let targets: Vec<PhysicianRecord> = candidates.into_iter().cloned().collect();

    let summary = TargetingSummary::compute(&targets);
    let payer_mix = PayerMix::compute(&targets);
    let map_points = mark_roster(roster, &targets);
    let message = select_message(config, targets.first().map(|p| p.name.as_str()));

    debug!(
        "Targeting run complete: {} targets, lift {:.1}",
        summary.target_count, summary.potential_lift
    );

    TargetingResult {
        targets,
        summary,
        payer_mix,
        map_points,
        message,
    }
}

/// Formulary mask. An unmatched winner identity leaves the roster
/// unfiltered rather than erroring out.
fn passes_formulary(p: &PhysicianRecord, winner: Option<Payer>) -> bool {
    match winner {
        Some(payer) => p.payer_shares.share(payer) > FORMULARY_SHARE_THRESHOLD,
        None => true,
    }
}

/// Geography mask. An empty selection means no restriction.
fn passes_geography(p: &PhysicianRecord, zips: &[String]) -> bool {
    zips.is_empty() || zips.iter().any(|z| z == &p.zip_code)
}

fn mark_roster(roster: &[PhysicianRecord], targets: &[PhysicianRecord]) -> Vec<MapPoint> {
    let target_ids: HashSet<Uuid> = targets.iter().map(|p| p.id).collect();

    roster
        .iter()
        .map(|p| MapPoint {
            name: p.name.clone(),
            zip_code: p.zip_code.clone(),
            latitude: p.latitude,
            longitude: p.longitude,
            trx_volume: p.trx_volume,
            marker: if target_ids.contains(&p.id) {
                Marker::Target
            } else {
                Marker::Other
            },
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
