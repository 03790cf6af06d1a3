use thiserror::Error;

/// Why an item couldn't go into a pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Every slot is taken
    #[error("Pack is full (capacity {capacity})")]
    PackFull { capacity: usize },
}
