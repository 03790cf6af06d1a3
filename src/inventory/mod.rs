// Inventory system module
//
// This module provides the player's pack:
// - Bounded, order-preserving item storage
// - Identity-based lookup and removal

pub mod error;
pub mod pack;

// Re-export main types
pub use error::InventoryError;
pub use pack::{PACK_CAPACITY, Pack};
