//! Ranked call-list CSV export.
//!
//! Columns mirror the on-screen call list: identity, zip, volume, and a
//! single share column for the formulary winner. Competitor share columns
//! are deliberately withheld from the exported file; when the scenario
//! winner is unmatched, no share column is written at all.

use std::path::Path;

use tracing::info;

use pulse_common::entities::{Payer, PhysicianRecord};

use crate::error::{ExportError, Result};

/// Conventional file name for a call-list download.
pub const TARGET_DOCTORS_FILE: &str = "target_doctors.csv";

const BASE_COLUMNS: [&str; 4] = ["Dr Name", "Specialty", "Zip Code", "TRx Volume"];

/// One exported row, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallListRow {
    pub name: String,
    pub specialty: String,
    pub zip_code: String,
    pub trx_volume: u32,
    /// Winner's share; None when the export carries no share column.
    pub winner_share: Option<f64>,
}

/// Render the ranked call list as a UTF-8 CSV document with header row.
pub fn export_call_list(targets: &[PhysicianRecord], winner: Option<Payer>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    let mut header: Vec<&str> = BASE_COLUMNS.to_vec();
    if let Some(payer) = winner {
        header.push(payer.share_column());
    }
    writer.write_record(&header)?;

    for p in targets {
        let mut row = vec![
            p.name.clone(),
            p.specialty.clone(),
            p.zip_code.clone(),
            p.trx_volume.to_string(),
        ];
        if let Some(payer) = winner {
            row.push(p.payer_shares.share(payer).to_string());
        }
        writer.write_record(&row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Write the call list to disk under the given path.
pub fn write_call_list(
    targets: &[PhysicianRecord],
    winner: Option<Payer>,
    path: &Path,
) -> Result<()> {
    let csv = export_call_list(targets, winner)?;
    std::fs::write(path, csv)?;
    info!("Wrote {} call-list rows to {}", targets.len(), path.display());
    Ok(())
}

/// Parse an exported call list back into rows. Used to verify that a
/// download round-trips losslessly.
pub fn parse_call_list(data: &str) -> Result<Vec<CallListRow>> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let has_share_column = reader.headers()?.len() > BASE_COLUMNS.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;

        let trx_volume: u32 = field(&record, 3)?
            .parse()
            .map_err(|_| ExportError::MalformedRow(format!("bad volume in {record:?}")))?;

        let winner_share = if has_share_column {
            let raw = field(&record, 4)?;
            Some(raw.parse().map_err(|_| {
                ExportError::MalformedRow(format!("bad share in {record:?}"))
            })?)
        } else {
            None
        };

        rows.push(CallListRow {
            name: field(&record, 0)?.to_string(),
            specialty: field(&record, 1)?.to_string(),
            zip_code: field(&record, 2)?.to_string(),
            trx_volume,
            winner_share,
        });
    }

    Ok(rows)
}

fn field<'a>(record: &'a csv::StringRecord, idx: usize) -> Result<&'a str> {
    record
        .get(idx)
        .ok_or_else(|| ExportError::MalformedRow(format!("missing field {idx} in {record:?}")))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_test_utils::{abc_roster, physician};

    #[test]
    fn test_header_includes_only_winner_share() {
        let targets = abc_roster();
        let csv = export_call_list(&targets, Some(Payer::Aetna)).unwrap();
        let header = csv.lines().next().unwrap();

        assert_eq!(header, "Dr Name,Specialty,Zip Code,TRx Volume,Aetna Share %");
        assert!(!csv.contains("UHC Share %"));
        assert!(!csv.contains("Cigna Share %"));
    }

    #[test]
    fn test_unmatched_winner_omits_share_column() {
        let targets = abc_roster();
        let csv = export_call_list(&targets, None).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "Dr Name,Specialty,Zip Code,TRx Volume");
    }

    #[test]
    fn test_rows_preserve_order() {
        let targets = vec![
            physician("Dr. B. Johnson", "19104", 300, (0.6, 0.2, 0.3)),
            physician("Dr. A. Smith", "19103", 100, (0.9, 0.1, 0.1)),
        ];
        let csv = export_call_list(&targets, Some(Payer::Uhc)).unwrap();
        let rows = parse_call_list(&csv).unwrap();

        assert_eq!(rows[0].name, "Dr. B. Johnson");
        assert_eq!(rows[0].trx_volume, 300);
        assert_eq!(rows[0].winner_share, Some(0.6));
        assert_eq!(rows[1].name, "Dr. A. Smith");
    }

    #[test]
    fn test_empty_target_set_exports_header_only() {
        let csv = export_call_list(&[], Some(Payer::Uhc)).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(parse_call_list(&csv).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_volume_is_rejected() {
        let bad = "Dr Name,Specialty,Zip Code,TRx Volume\nDr. A. Smith,Cardiology,19103,lots\n";
        assert!(matches!(
            parse_call_list(bad),
            Err(ExportError::MalformedRow(_))
        ));
    }
}
