//! Core entity types for the simulated commercial book of business.
//! These are the records the targeting pipeline reads; it never writes
//! back into them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Payer
// ---------------------------------------------------------------------------

/// The three national payers tracked in the demo dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payer {
    Uhc,
    Aetna,
    Cigna,
}

impl Payer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Payer::Uhc   => "uhc",
            Payer::Aetna => "aetna",
            Payer::Cigna => "cigna",
        }
    }

    /// Parse a payer identity from a scenario config string.
    ///
    /// Returns None for identities outside the tracked set; the formulary
    /// filter treats that as an unrestricted pass-through rather than an
    /// error, so scenarios keyed to an untracked plan still render.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uhc" | "unitedhealthcare" => Some(Payer::Uhc),
            "aetna"                    => Some(Payer::Aetna),
            "cigna"                    => Some(Payer::Cigna),
            _                          => None,
        }
    }

    /// Column header used for this payer in the call-list export.
    pub fn share_column(&self) -> &'static str {
        match self {
            Payer::Uhc   => "UHC Share %",
            Payer::Aetna => "Aetna Share %",
            Payer::Cigna => "Cigna Share %",
        }
    }
}

// ---------------------------------------------------------------------------
// Payer shares
// ---------------------------------------------------------------------------

/// Per-payer fraction of a physician's prescription volume.
///
/// Shares are in [0, 1] but are NOT required to sum to 1 across the three
/// tracked payers; the remainder belongs to smaller regional plans. No
/// normalisation is applied anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayerShares {
    pub uhc: f64,
    pub aetna: f64,
    pub cigna: f64,
}

impl PayerShares {
    /// Select the share column for a payer.
    pub fn share(&self, payer: Payer) -> f64 {
        match payer {
            Payer::Uhc   => self.uhc,
            Payer::Aetna => self.aetna,
            Payer::Cigna => self.cigna,
        }
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// Commercial target tier assigned by the brand team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Gold,
    Silver,
    Bronze,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Gold   => "gold",
            Segment::Silver => "silver",
            Segment::Bronze => "bronze",
        }
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Call strategy for a scenario. Selects the rep messaging template and
/// nothing else — target membership is strategy-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Defensive,
    Offensive,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Defensive => "defensive",
            Strategy::Offensive => "offensive",
        }
    }
}

// ---------------------------------------------------------------------------
// Competitor access
// ---------------------------------------------------------------------------

/// Competitor formulary access in the territory, captured as a
/// pull-through driver. Carried into messaging context only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitorAccess {
    BlockedNd,
    PaRequired,
    OpenAccess,
}

impl CompetitorAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitorAccess::BlockedNd  => "blocked_nd",
            CompetitorAccess::PaRequired => "pa_required",
            CompetitorAccess::OpenAccess => "open_access",
        }
    }

    /// Display label matching the field-team vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            CompetitorAccess::BlockedNd  => "Blocked / ND",
            CompetitorAccess::PaRequired => "PA Required",
            CompetitorAccess::OpenAccess => "Open Access",
        }
    }
}

// ---------------------------------------------------------------------------
// Physician record
// ---------------------------------------------------------------------------

/// One physician in the roster.
///
/// Immutable once generated: the pipeline computes derived membership and
/// ranking over records, never mutates them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicianRecord {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Monthly TRx (total prescriptions) volume.
    pub trx_volume: u32,
    pub payer_shares: PayerShares,
    pub segment: Segment,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payer_from_str_known() {
        assert_eq!(Payer::from_str("uhc"), Some(Payer::Uhc));
        assert_eq!(Payer::from_str("UnitedHealthcare"), Some(Payer::Uhc));
        assert_eq!(Payer::from_str("Aetna"), Some(Payer::Aetna));
        assert_eq!(Payer::from_str("cigna"), Some(Payer::Cigna));
    }

    #[test]
    fn test_payer_from_str_unknown_is_none() {
        assert_eq!(Payer::from_str("humana"), None);
        assert_eq!(Payer::from_str(""), None);
    }

    #[test]
    fn test_share_selection_matches_column() {
        let shares = PayerShares { uhc: 0.9, aetna: 0.2, cigna: 0.05 };
        assert_eq!(shares.share(Payer::Uhc), 0.9);
        assert_eq!(shares.share(Payer::Aetna), 0.2);
        assert_eq!(shares.share(Payer::Cigna), 0.05);
    }

    #[test]
    fn test_competitor_access_labels() {
        assert_eq!(CompetitorAccess::BlockedNd.label(), "Blocked / ND");
        assert_eq!(CompetitorAccess::PaRequired.label(), "PA Required");
        assert_eq!(CompetitorAccess::OpenAccess.label(), "Open Access");
    }
}
