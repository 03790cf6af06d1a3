use serde::{Deserialize, Serialize};

use crate::error::{EntityError, require_number};
use crate::stats::Health;

/// The kinds of zombie in the world
///
/// All kinds share the same attributes for now. The kind is the hook for
/// kind-specific abilities once combat exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZombieKind {
    Normal,
    Fast,
    Strong,
    Ranged,
    Exploding,
}

/// A zombie: plain attributes, no behavior
#[derive(Debug, Clone, Serialize)]
pub struct Zombie {
    kind: ZombieKind,
    health: Health,
    pub strength: f64,
    pub speed: f64,
    pub is_alive: bool,
}

impl Zombie {
    /// Creates a zombie of the given kind at full health
    pub fn new(kind: ZombieKind, health: f64, strength: f64, speed: f64) -> Result<Self, EntityError> {
        Ok(Zombie {
            kind,
            health: Health::new(require_number("health", health)?),
            strength: require_number("strength", strength)?,
            speed: require_number("speed", speed)?,
            is_alive: true,
        })
    }

    pub fn normal(health: f64, strength: f64, speed: f64) -> Result<Self, EntityError> {
        Self::new(ZombieKind::Normal, health, strength, speed)
    }

    pub fn fast(health: f64, strength: f64, speed: f64) -> Result<Self, EntityError> {
        Self::new(ZombieKind::Fast, health, strength, speed)
    }

    pub fn strong(health: f64, strength: f64, speed: f64) -> Result<Self, EntityError> {
        Self::new(ZombieKind::Strong, health, strength, speed)
    }

    pub fn ranged(health: f64, strength: f64, speed: f64) -> Result<Self, EntityError> {
        Self::new(ZombieKind::Ranged, health, strength, speed)
    }

    pub fn exploding(health: f64, strength: f64, speed: f64) -> Result<Self, EntityError> {
        Self::new(ZombieKind::Exploding, health, strength, speed)
    }

    pub fn kind(&self) -> ZombieKind {
        self.kind
    }

    pub fn health(&self) -> f64 {
        self.health.current()
    }

    pub fn max_health(&self) -> f64 {
        self.health.max()
    }
}
