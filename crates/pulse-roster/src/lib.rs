//! pulse-roster — Roster acquisition for the targeting pipeline.
//!
//! Providers abstract where physician records come from, so the pipeline
//! and its tests never depend on a particular data source: the shipped
//! binary generates a simulated roster, tests supply fixtures, and a real
//! deployment would wire in a claims-data client.

pub mod provider;
pub mod synthetic;
pub mod trend;

pub use provider::{FixtureRosterProvider, Roster, RosterProvider, RosterSource};
pub use synthetic::SyntheticRosterProvider;
pub use trend::{simulate_trend, TrendPoint};
