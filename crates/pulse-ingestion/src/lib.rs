//! pulse-ingestion — Upload parsing for formulary and territory files.
//!
//! Stands between raw uploaded bytes and the structured overrides the
//! rest of the system consumes. Parse failures surface as validation
//! errors for the user; the roster already in use is never disturbed.

pub mod error;
pub mod formulary;
pub mod territory;

pub use error::{IngestError, Result};
pub use formulary::{apply_overrides, parse_formulary_file, PayerOverrides};
pub use territory::{parse_territory_file, ZipTerritoryMap};
