//! Trait for roster data access.
//!
//! Implementations can use:
//! - Seeded synthetic generation (the shipped demo)
//! - In-memory fixtures (testing)
//! - An external claims/CRM feed (production)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pulse_common::entities::PhysicianRecord;
use pulse_common::error::Result;

/// Where a roster came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterSource {
    Synthetic { seed: u64 },
    Fixture,
    External,
}

/// A session's full set of physician records plus provenance.
///
/// Built once per session. Records are immutable after that point; all
/// targeting state is derived, never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub physicians: Vec<PhysicianRecord>,
    pub generated_at: DateTime<Utc>,
    pub source: RosterSource,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.physicians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.physicians.is_empty()
    }

    /// Distinct zip codes present in the roster, sorted. Drives the
    /// geography selector choices.
    pub fn zip_codes(&self) -> Vec<String> {
        let mut zips: Vec<String> = self
            .physicians
            .iter()
            .map(|p| p.zip_code.clone())
            .collect();
        zips.sort();
        zips.dedup();
        zips
    }
}

/// Trait for obtaining a roster.
pub trait RosterProvider: Send + Sync {
    fn roster(&self) -> Result<Roster>;
}

// ── Fixture Implementation for Testing ───────────────────────────────────────

/// In-memory provider with hand-built records for unit tests.
pub struct FixtureRosterProvider {
    physicians: Vec<PhysicianRecord>,
}

impl FixtureRosterProvider {
    pub fn new() -> Self {
        Self { physicians: Vec::new() }
    }

    /// Add a record.
    pub fn with(mut self, record: PhysicianRecord) -> Self {
        self.physicians.push(record);
        self
    }
}

impl Default for FixtureRosterProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterProvider for FixtureRosterProvider {
    fn roster(&self) -> Result<Roster> {
        Ok(Roster {
            physicians: self.physicians.clone(),
            generated_at: Utc::now(),
            source: RosterSource::Fixture,
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
