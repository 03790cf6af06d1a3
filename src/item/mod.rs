// Item system module
//
// Items share one base shape (identity + name) and differ by kind:
// - Misc items that can only be carried
// - Weapons that can be equipped
// - Food that restores health

pub mod definition;
pub mod properties;

// Re-export main types for convenient access
pub use definition::{Item, ItemId};
pub use properties::ItemKind;
