//! Runs a zombie survival scenario
//!
//! Usage: `zombie_survival [scenario.json]`. Without a path the bundled
//! sample run is played. Narration goes through `tracing` (filter with
//! `RUST_LOG`); the final state is printed as JSON.

use tracing_subscriber::EnvFilter;
use zombie_survival::scenario::{Scenario, ScenarioError, ScenarioRunner};

fn main() -> Result<(), ScenarioError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zombie_survival=info")),
        )
        .init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading scenario");
            Scenario::load_from_file(&path)?
        }
        None => Scenario::sample_run()?,
    };

    let report = ScenarioRunner::run(&scenario)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
