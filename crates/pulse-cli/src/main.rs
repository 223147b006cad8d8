//! Pulse — pull-through targeting scenario runner.
//! Entry point for the CLI binary.

use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pulse_common::scenario::ScenarioConfig;
use pulse_export::{write_call_list, TARGET_DOCTORS_FILE};
use pulse_roster::{RosterProvider, SyntheticRosterProvider};
use pulse_targeting::compute_targets;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pulse_targeting=debug,pulse_roster=debug")),
        )
        .init();

    info!("Pulse targeting starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load scenario configuration
    let config = match ScenarioConfig::load() {
        Ok(c) => {
            info!(
                "Scenario loaded. Winner: {}, zips: {:?}, capacity: {}, strategy: {}",
                c.formulary_winner, c.selected_zips, c.call_capacity, c.strategy.as_str()
            );
            c
        }
        Err(e) => {
            warn!("Could not load pulse.toml: {e}");
            warn!("Copy pulse.example.toml to pulse.toml to customise. Using defaults.");
            ScenarioConfig::default()
        }
    };

    // Build the session roster
    let seed = env_u64("PULSE_SEED", 42);
    let roster_size = env_u64("PULSE_ROSTER_SIZE", 50) as usize;
    let provider = SyntheticRosterProvider::new(seed, roster_size);
    let roster = provider.roster()?;
    info!("Roster ready: {} physicians (seed {seed})", roster.len());

    // Run the pipeline
    let result = compute_targets(&roster.physicians, &config);

    info!("Target Doctors: {}", result.summary.target_count);
    info!("Potential Volume Lift: {:.0}", result.summary.potential_lift);
    info!("Est. Revenue Impact: ${:.0}", result.summary.revenue_impact);

    match &result.payer_mix {
        Some(mix) => {
            for (payer, share) in mix.slices() {
                info!("Payer mix (targeted) — {payer}: {:.1}%", share * 100.0);
            }
        }
        None => info!("No targets selected."),
    }

    info!("{}", result.message.title);
    info!("Primary: {}", result.message.primary);
    info!("Context: {}", result.message.context);
    info!("Action: {}", result.message.action);
    info!(
        "Competitor access: {}",
        result.message.competitor_access.label()
    );

    info!("Priority call list:");
    for (rank, p) in result.targets.iter().enumerate() {
        info!(
            "  #{:<3} {:<18} {:<18} {}  TRx {}",
            rank + 1,
            p.name,
            p.specialty,
            p.zip_code,
            p.trx_volume
        );
    }

    write_call_list(
        &result.targets,
        config.winner(),
        Path::new(TARGET_DOCTORS_FILE),
    )?;
    info!("Call list written to {TARGET_DOCTORS_FILE}");

    Ok(())
}

fn env_u64(name: &str, fallback: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
