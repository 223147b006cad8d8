//! Simulated six-month TRx trend for the physician deep-dive view.
//!
//! Real deployments would pull longitudinal claims data; the demo derives
//! a plausible series from the physician's current volume instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pulse_common::entities::PhysicianRecord;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Monthly step jitter around the physician's average volume, in TRx.
const STEP_JITTER: f64 = 15.0;

/// One month of simulated prescription volume.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub trx_volume: f64,
}

/// Jittered cumulative walk anchored at the physician's current volume.
///
/// Deterministic per (record, seed): the rng is keyed on the record id so
/// the chart stays stable across recomputations while differing between
/// physicians. Values are absolute-valued, never negative.
pub fn simulate_trend(record: &PhysicianRecord, seed: u64) -> Vec<TrendPoint> {
    let mut rng = StdRng::seed_from_u64(seed ^ record.id.as_u128() as u64);

    let base = record.trx_volume as f64;
    let mean_step = base / MONTHS.len() as f64;

    let mut cumulative = 0.0;
    MONTHS
        .iter()
        .map(|&month| {
            cumulative += mean_step + rng.gen_range(-STEP_JITTER..STEP_JITTER);
            TrendPoint {
                month,
                trx_volume: (base + cumulative).abs(),
            }
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
