//! pulse-test-utils — Shared fixtures for Pulse workspace tests.

use uuid::Uuid;

use pulse_common::entities::{PayerShares, PhysicianRecord, Segment};

/// Build a physician record with the given vitals and neutral defaults for
/// everything else.
pub fn physician(name: &str, zip: &str, trx_volume: u32, shares: (f64, f64, f64)) -> PhysicianRecord {
    PhysicianRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        specialty: "Cardiology".to_string(),
        zip_code: zip.to_string(),
        latitude: 39.99,
        longitude: -75.16,
        trx_volume,
        payer_shares: PayerShares {
            uhc:   shares.0,
            aetna: shares.1,
            cigna: shares.2,
        },
        segment: Segment::Silver,
    }
}

/// Three-physician roster exercising every filter edge: A passes both the
/// UHC share threshold and the 19103 zip restriction, B passes the share
/// threshold but sits in 19104, C is in 19103 but below the threshold.
pub fn abc_roster() -> Vec<PhysicianRecord> {
    vec![
        physician("Dr. A. Smith", "19103", 100, (0.9, 0.1, 0.1)),
        physician("Dr. B. Johnson", "19104", 300, (0.6, 0.2, 0.3)),
        physician("Dr. C. Williams", "19103", 50, (0.2, 0.8, 0.4)),
    ]
}
