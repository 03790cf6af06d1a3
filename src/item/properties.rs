use serde::{Deserialize, Serialize};

/// Different categories of items with type-specific data
///
/// Every item shares the same base shape (an identity and a name); the kind
/// carries whatever extra data that category needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    /// Plain item with no special use
    Misc,

    /// Can be equipped for use in battle
    Weapon { damage: f64 },

    /// Restores health to the player when eaten
    Food { energy: f64 },
}

impl ItemKind {
    pub fn is_weapon(&self) -> bool {
        matches!(self, ItemKind::Weapon { .. })
    }

    pub fn is_food(&self) -> bool {
        matches!(self, ItemKind::Food { .. })
    }
}
