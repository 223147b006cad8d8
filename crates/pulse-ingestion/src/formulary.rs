//! Formulary status uploads.
//!
//! Expected CSV shape: `Dr Name,UHC Share %,Aetna Share %,Cigna Share %`
//! with shares as fractions in [0, 1]. Extra columns are ignored; column
//! order is free.

use std::collections::HashMap;

use tracing::info;

use pulse_common::entities::{PayerShares, PhysicianRecord};

use crate::error::{IngestError, Result};

const NAME_COLUMN: &str = "Dr Name";
const SHARE_COLUMNS: [&str; 3] = ["UHC Share %", "Aetna Share %", "Cigna Share %"];

/// Parsed per-physician payer-share overrides, keyed by physician name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayerOverrides {
    shares: HashMap<String, PayerShares>,
}

impl PayerOverrides {
    pub fn get(&self, name: &str) -> Option<&PayerShares> {
        self.shares.get(name)
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Parse an uploaded formulary-status file.
///
/// Validation failures return an error without side effects; callers keep
/// the last-known-good roster untouched.
pub fn parse_formulary_file(bytes: &[u8]) -> Result<PayerOverrides> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers()?.clone();
    let name_idx = column_index(&headers, NAME_COLUMN)?;
    let uhc_idx = column_index(&headers, SHARE_COLUMNS[0])?;
    let aetna_idx = column_index(&headers, SHARE_COLUMNS[1])?;
    let cigna_idx = column_index(&headers, SHARE_COLUMNS[2])?;

    let mut shares = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or_default().to_string();

        shares.insert(
            name.clone(),
            PayerShares {
                uhc:   parse_share(&record, uhc_idx, &name)?,
                aetna: parse_share(&record, aetna_idx, &name)?,
                cigna: parse_share(&record, cigna_idx, &name)?,
            },
        );
    }

    if shares.is_empty() {
        return Err(IngestError::Empty);
    }

    info!("Parsed formulary overrides for {} physicians", shares.len());
    Ok(PayerOverrides { shares })
}

/// Apply overrides to a roster, producing a new record vector. Records
/// without an override are carried over unchanged; the input roster is
/// never written to.
pub fn apply_overrides(
    roster: &[PhysicianRecord],
    overrides: &PayerOverrides,
) -> Vec<PhysicianRecord> {
    roster
        .iter()
        .cloned()
        .map(|mut p| {
            if let Some(shares) = overrides.get(&p.name) {
                p.payer_shares = *shares;
            }
            p
        })
        .collect()
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(IngestError::MissingColumn(name))
}

fn parse_share(record: &csv::StringRecord, idx: usize, physician: &str) -> Result<f64> {
    let raw = record.get(idx).unwrap_or_default();
    let value: f64 = raw.parse().map_err(|_| IngestError::InvalidShare {
        physician: physician.to_string(),
        value: raw.to_string(),
        reason: "not a number".to_string(),
    })?;

    if !(0.0..=1.0).contains(&value) {
        return Err(IngestError::InvalidShare {
            physician: physician.to_string(),
            value: raw.to_string(),
            reason: "share must be in [0, 1]".to_string(),
        });
    }

    Ok(value)
}

// ── Tests ───────────────────────────────────────────────────────────────────
