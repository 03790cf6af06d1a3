use thiserror::Error;

use crate::error::EntityError;

/// Errors that can occur when loading or running a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entity in the scenario failed validation
    #[error("Invalid entity: {0}")]
    Entity(#[from] EntityError),

    /// An action names an item label that isn't in the `items` table
    #[error("Unknown item label: {0}")]
    UnknownItem(String),
}
