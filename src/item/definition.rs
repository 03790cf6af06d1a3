use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::properties::ItemKind;
use crate::error::{EntityError, require_name, require_number};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of an item
///
/// Two items with the same name are still different items. Pack lookups,
/// equipping and eating all compare ids, never names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    fn next() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An item in the world
///
/// Cloning an `Item` gives another handle to the *same* item (same id), the
/// way holding a second reference would. Building a new item with
/// [`Item::new`], [`Item::weapon`] or [`Item::food`] always gives a new id.
///
/// # Example
///
/// ```rust
/// use zombie_survival::item::Item;
///
/// let shovel = Item::weapon("shovel", 15.0)?;
/// let other_shovel = Item::weapon("shovel", 15.0)?;
/// assert!(shovel.is_same(&shovel.clone()));
/// assert!(!shovel.is_same(&other_shovel));
/// # Ok::<(), zombie_survival::error::EntityError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    #[serde(flatten)]
    kind: ItemKind,
}

impl Item {
    /// Creates a plain item
    pub fn new(name: impl Into<String>) -> Result<Self, EntityError> {
        Self::with_kind(name, ItemKind::Misc)
    }

    /// Creates a weapon item that can be equipped
    pub fn weapon(name: impl Into<String>, damage: f64) -> Result<Self, EntityError> {
        let damage = require_number("damage", damage)?;
        Self::with_kind(name, ItemKind::Weapon { damage })
    }

    /// Creates a food item that restores `energy` health when eaten
    pub fn food(name: impl Into<String>, energy: f64) -> Result<Self, EntityError> {
        let energy = require_number("energy", energy)?;
        Self::with_kind(name, ItemKind::Food { energy })
    }

    fn with_kind(name: impl Into<String>, kind: ItemKind) -> Result<Self, EntityError> {
        Ok(Item {
            id: ItemId::next(),
            name: require_name("name", name)?,
            kind,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn damage(&self) -> Option<f64> {
        match self.kind {
            ItemKind::Weapon { damage } => Some(damage),
            _ => None,
        }
    }

    pub fn energy(&self) -> Option<f64> {
        match self.kind {
            ItemKind::Food { energy } => Some(energy),
            _ => None,
        }
    }

    pub fn is_weapon(&self) -> bool {
        self.kind.is_weapon()
    }

    pub fn is_food(&self) -> bool {
        self.kind.is_food()
    }

    /// Returns true if both handles refer to the same item
    pub fn is_same(&self, other: &Item) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}
