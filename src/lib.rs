//! Zombie survival game state
//!
//! A player with a three-slot pack, a weapon slot, and health; items that are
//! plain, weapons, or food; and a handful of zombie kinds. Everything runs in
//! memory on one thread.

pub mod error;
pub mod inventory;
pub mod item;
pub mod narration;
pub mod player;
pub mod scenario;
pub mod stats;
pub mod zombie;

pub use error::EntityError;
pub use item::{Item, ItemId, ItemKind};
pub use narration::{EventLog, Narrator, PlayerEvent, SilentNarrator, TracingNarrator};
pub use player::{EatOutcome, EquipOutcome, Player, UseOutcome};
pub use zombie::{Zombie, ZombieKind};
