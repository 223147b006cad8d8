//! pulse-common — Shared types, errors, and configuration used across all Pulse crates.

pub mod error;
pub mod entities;
pub mod scenario;

// Re-export commonly used types
pub use entities::{CompetitorAccess, Payer, PayerShares, PhysicianRecord, Segment, Strategy};
pub use error::{PulseError, Result};
pub use scenario::ScenarioConfig;
