//! pulse-targeting — Pull-through target selection engine.
//!
//! A pure, synchronous transformation from a physician roster and a
//! scenario configuration to a ranked call list with aggregate metrics,
//! payer-mix averages, geospatial markers, and rep messaging.
//! See ARCHITECTURE.md §3 for the pipeline contract.

pub mod messaging;
pub mod metrics;
pub mod payer_mix;
pub mod pipeline;

pub use messaging::{select_message, CallMessage, GENERIC_PHYSICIAN};
pub use metrics::{TargetingSummary, PULL_THROUGH_RATE, REVENUE_PER_SCRIPT};
pub use payer_mix::PayerMix;
pub use pipeline::{compute_targets, MapPoint, Marker, TargetingResult, FORMULARY_SHARE_THRESHOLD};
