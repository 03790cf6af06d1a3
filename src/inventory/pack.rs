use super::error::InventoryError;
use crate::item::{Item, ItemId};
use serde::Serialize;

/// How many items a player's pack can hold
pub const PACK_CAPACITY: usize = 3;

/// Bounded, order-preserving item container
///
/// Items keep the order they were added in. Lookups go by item identity, so
/// two items that happen to share a name are never confused.
#[derive(Debug, Clone, Serialize)]
pub struct Pack {
    items: Vec<Item>,
    capacity: usize,
}

impl Pack {
    /// Creates a new empty pack with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Pack {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if all slots are occupied
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Finds the first slot holding this exact item
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Returns true if this exact item (not just one with the same name) is in the pack
    pub fn contains(&self, item: &Item) -> bool {
        self.position(item.id()).is_some()
    }

    /// Appends an item to the end of the pack
    pub fn add(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::PackFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the first slot holding this exact item
    ///
    /// Returns the removed item, or None if it wasn't in the pack.
    pub fn remove(&mut self, item: &Item) -> Option<Item> {
        let index = self.position(item.id())?;
        Some(self.items.remove(index))
    }

    /// Names of the items, in pack order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }
}

impl Default for Pack {
    fn default() -> Self {
        Self::new(PACK_CAPACITY)
    }
}
