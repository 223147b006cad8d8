//! Payer-mix aggregation over the target set.

use serde::{Deserialize, Serialize};

use pulse_common::entities::PhysicianRecord;

/// Mean payer shares across the target set.
///
/// `other` is the residual after the three tracked payers. It is NOT
/// clamped: source shares are independent draws that need not sum to 1,
/// so the residual can go negative. Preserved as-is pending a data-side
/// normalisation decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayerMix {
    pub uhc: f64,
    pub aetna: f64,
    pub cigna: f64,
    pub other: f64,
}

impl PayerMix {
    /// Compute the mix over a target set. Returns None when the set is
    /// empty so callers never divide by zero.
    pub fn compute(targets: &[PhysicianRecord]) -> Option<Self> {
        if targets.is_empty() {
            return None;
        }

        let n = targets.len() as f64;
        let uhc = targets.iter().map(|p| p.payer_shares.uhc).sum::<f64>() / n;
        let aetna = targets.iter().map(|p| p.payer_shares.aetna).sum::<f64>() / n;
        let cigna = targets.iter().map(|p| p.payer_shares.cigna).sum::<f64>() / n;

        Some(Self {
            uhc,
            aetna,
            cigna,
            other: 1.0 - (uhc + aetna + cigna),
        })
    }

    /// Slices for the payer-mix chart, in display order.
    pub fn slices(&self) -> [(&'static str, f64); 4] {
        [
            ("UHC", self.uhc),
            ("Aetna", self.aetna),
            ("Cigna", self.cigna),
            ("Other", self.other),
        ]
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
