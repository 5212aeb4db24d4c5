//! signmag-fixed demo
//!
//! Runs the trajectory simulation twice and checks that both runs
//! produce the same digest.
//!
//! Usage: `signmag-fixed [config.json]`

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use signmag_fixed::{sim, SimConfig, VERSION};

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("signmag-fixed v{}", VERSION);

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig::default(),
    };
    info!(
        "Steps: {} (dt = {}s, gravity = {})",
        config.steps, config.time_step, config.gravity
    );

    info!("=== Running Simulation ===");
    let report = sim::run(&config).context("invalid simulation config")?;

    let state = &report.final_state;
    let fmt = &config.format;
    info!(
        "Final position: ({}, {})",
        fmt.render(state.x),
        fmt.render(state.y)
    );
    info!(
        "Final velocity: ({}, {})",
        fmt.render(state.vx),
        fmt.render(state.vy)
    );
    info!("Bounces: {}", report.bounces);
    info!("Trace Digest: {}", hex::encode(report.digest));

    info!("=== Verifying Determinism ===");
    let replay = sim::run(&config).context("replay failed")?;
    info!("Replay Digest: {}", hex::encode(replay.digest));

    if report.digest != replay.digest {
        error!("DETERMINISM FAILURE: Digests differ!");
        bail!("replay digest mismatch");
    }
    info!("DETERMINISM VERIFIED: Digests match!");

    Ok(())
}

/// Load a JSON config; missing fields take their defaults.
fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}
