//! pulse-export — Call-list CSV export.
//!
//! Writes the ranked call list to the `target_doctors.csv` download and
//! reads exported files back for verification.

pub mod call_list;
pub mod error;

pub use call_list::{
    export_call_list, parse_call_list, write_call_list, CallListRow, TARGET_DOCTORS_FILE,
};
pub use error::{ExportError, Result};
