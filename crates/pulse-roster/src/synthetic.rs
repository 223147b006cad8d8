//! Seeded synthetic roster generation.
//!
//! Produces the Philadelphia demo book of business. Fully deterministic:
//! the same seed always yields the same roster, record ids included, so
//! scenario runs are reproducible across sessions.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use uuid::Uuid;

use pulse_common::entities::{PayerShares, PhysicianRecord, Segment};
use pulse_common::error::Result;

use crate::provider::{Roster, RosterProvider, RosterSource};

const SURNAMES: [&str; 5] = ["Smith", "Johnson", "Williams", "Jones", "Brown"];

const SPECIALTIES: [&str; 4] = [
    "Cardiology",
    "Endocrinology",
    "Internal Medicine",
    "Family Practice",
];

const ZIP_CODES: [&str; 5] = ["19103", "19104", "19106", "19107", "19130"];

const SEGMENTS: [Segment; 3] = [Segment::Gold, Segment::Silver, Segment::Bronze];

/// Philadelphia metro bounding box for generated practice locations.
const LAT_RANGE: (f64, f64) = (39.95, 40.05);
const LON_RANGE: (f64, f64) = (-75.25, -75.10);

/// Monthly TRx volume range, inclusive.
const TRX_RANGE: (u32, u32) = (50, 500);

/// Deterministic generator for a simulated physician roster.
pub struct SyntheticRosterProvider {
    seed: u64,
    n_physicians: usize,
}

impl SyntheticRosterProvider {
    pub fn new(seed: u64, n_physicians: usize) -> Self {
        Self { seed, n_physicians }
    }
}

impl Default for SyntheticRosterProvider {
    /// The demo roster: 50 physicians, seed 42.
    fn default() -> Self {
        Self::new(42, 50)
    }
}

impl RosterProvider for SyntheticRosterProvider {
    fn roster(&self) -> Result<Roster> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut physicians = Vec::with_capacity(self.n_physicians);

        for i in 0..self.n_physicians {
            let initial = (b'A' + (i % 26) as u8) as char;
            let surname = SURNAMES[i % SURNAMES.len()];

            physicians.push(PhysicianRecord {
                // Ids come from the seeded rng too, keeping rosters
                // byte-identical across runs with the same seed.
                id: Uuid::from_u128(rng.gen()),
                name: format!("Dr. {initial}. {surname}"),
                specialty: pick(&mut rng, &SPECIALTIES).to_string(),
                zip_code: pick(&mut rng, &ZIP_CODES).to_string(),
                latitude: rng.gen_range(LAT_RANGE.0..LAT_RANGE.1),
                longitude: rng.gen_range(LON_RANGE.0..LON_RANGE.1),
                trx_volume: rng.gen_range(TRX_RANGE.0..=TRX_RANGE.1),
                payer_shares: PayerShares {
                    uhc:   rng.gen_range(0.0..1.0),
                    aetna: rng.gen_range(0.0..1.0),
                    cigna: rng.gen_range(0.0..1.0),
                },
                segment: *pick(&mut rng, &SEGMENTS),
            });
        }

        debug!(
            "Generated synthetic roster: {} physicians (seed {})",
            physicians.len(),
            self.seed
        );

        Ok(Roster {
            physicians,
            generated_at: Utc::now(),
            source: RosterSource::Synthetic { seed: self.seed },
        })
    }
}

fn pick<'a, T>(rng: &mut StdRng, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_roster() {
        let a = SyntheticRosterProvider::new(42, 50).roster().unwrap();
        let b = SyntheticRosterProvider::new(42, 50).roster().unwrap();
        assert_eq!(a.physicians, b.physicians);
    }

    #[test]
    fn test_different_seed_different_roster() {
        let a = SyntheticRosterProvider::new(42, 50).roster().unwrap();
        let b = SyntheticRosterProvider::new(43, 50).roster().unwrap();
        assert_ne!(a.physicians, b.physicians);
    }

    #[test]
    fn test_generated_values_in_range() {
        let roster = SyntheticRosterProvider::new(7, 100).roster().unwrap();
        assert_eq!(roster.len(), 100);

        for p in &roster.physicians {
            assert!(p.latitude >= LAT_RANGE.0 && p.latitude < LAT_RANGE.1);
            assert!(p.longitude >= LON_RANGE.0 && p.longitude < LON_RANGE.1);
            assert!(p.trx_volume >= TRX_RANGE.0 && p.trx_volume <= TRX_RANGE.1);
            assert!((0.0..1.0).contains(&p.payer_shares.uhc));
            assert!((0.0..1.0).contains(&p.payer_shares.aetna));
            assert!((0.0..1.0).contains(&p.payer_shares.cigna));
            assert!(ZIP_CODES.contains(&p.zip_code.as_str()));
            assert!(SPECIALTIES.contains(&p.specialty.as_str()));
        }
    }

    #[test]
    fn test_names_cycle_through_pool() {
        let roster = SyntheticRosterProvider::new(1, 6).roster().unwrap();
        assert_eq!(roster.physicians[0].name, "Dr. A. Smith");
        assert_eq!(roster.physicians[1].name, "Dr. B. Johnson");
        assert_eq!(roster.physicians[5].name, "Dr. F. Smith");
    }

    #[test]
    fn test_source_records_seed() {
        let roster = SyntheticRosterProvider::new(99, 5).roster().unwrap();
        assert_eq!(roster.source, RosterSource::Synthetic { seed: 99 });
    }
}
