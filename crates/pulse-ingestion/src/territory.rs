//! Zip-to-territory mapping uploads.
//!
//! Expected CSV shape: `Zip Code,Territory`. The parsed map lets a
//! scenario's zip restriction be filled from a named territory instead of
//! hand-picked zips.

use std::collections::HashMap;

use tracing::info;

use crate::error::{IngestError, Result};

const ZIP_COLUMN: &str = "Zip Code";
const TERRITORY_COLUMN: &str = "Territory";

/// Mapping of zip codes to territory labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZipTerritoryMap {
    map: HashMap<String, String>,
}

impl ZipTerritoryMap {
    pub fn territory(&self, zip: &str) -> Option<&str> {
        self.map.get(zip).map(|t| t.as_str())
    }

    /// Zip codes belonging to a territory, sorted. Feeds directly into
    /// `ScenarioConfig::selected_zips`.
    pub fn zips_for(&self, territory: &str) -> Vec<String> {
        let mut zips: Vec<String> = self
            .map
            .iter()
            .filter(|(_, t)| t.as_str() == territory)
            .map(|(z, _)| z.clone())
            .collect();
        zips.sort();
        zips
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Parse an uploaded zip-to-territory file.
pub fn parse_territory_file(bytes: &[u8]) -> Result<ZipTerritoryMap> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers()?.clone();
    let zip_idx = headers
        .iter()
        .position(|h| h == ZIP_COLUMN)
        .ok_or(IngestError::MissingColumn(ZIP_COLUMN))?;
    let territory_idx = headers
        .iter()
        .position(|h| h == TERRITORY_COLUMN)
        .ok_or(IngestError::MissingColumn(TERRITORY_COLUMN))?;

    let mut map = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let zip = record.get(zip_idx).unwrap_or_default();
        let territory = record.get(territory_idx).unwrap_or_default();
        if zip.is_empty() {
            continue;
        }
        map.insert(zip.to_string(), territory.to_string());
    }

    if map.is_empty() {
        return Err(IngestError::Empty);
    }

    info!("Parsed territory mapping for {} zip codes", map.len());
    Ok(ZipTerritoryMap { map })
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CSV: &str = "\
Zip Code,Territory
19103,Center City
19104,University City
19106,Center City
";

    #[test]
    fn test_parse_good_file() {
        let map = parse_territory_file(GOOD_CSV.as_bytes()).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.territory("19104"), Some("University City"));
        assert_eq!(map.territory("19130"), None);
    }

    #[test]
    fn test_zips_for_territory_sorted() {
        let map = parse_territory_file(GOOD_CSV.as_bytes()).unwrap();
        assert_eq!(map.zips_for("Center City"), vec!["19103", "19106"]);
        assert!(map.zips_for("Suburbs").is_empty());
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "Zip Code\n19103\n";
        let err = parse_territory_file(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(TERRITORY_COLUMN)));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let csv = "Zip Code,Territory\n";
        assert!(matches!(
            parse_territory_file(csv.as_bytes()),
            Err(IngestError::Empty)
        ));
    }
}
