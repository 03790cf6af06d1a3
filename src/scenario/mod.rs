//! Scripted scenarios
//!
//! A scenario is a JSON file describing a player, some zombies, a table of
//! labelled items, and a list of actions for the player to perform. The
//! bundled sample run exercises every player action once or more.

pub mod error;
pub mod runner;
pub mod types;

use std::path::Path;

pub use error::ScenarioError;
pub use runner::{ScenarioReport, ScenarioRunner};
pub use types::{Action, ItemConfig, PlayerConfig, Scenario, ZombieConfig};

const SAMPLE_RUN: &str = include_str!("../../scenarios/sample_run.json");

impl Scenario {
    /// Parses a scenario from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a scenario from a JSON file on disk
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The bundled sample run
    pub fn sample_run() -> Result<Self, ScenarioError> {
        Self::from_json(SAMPLE_RUN)
    }
}
