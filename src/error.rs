//! Construction-time errors for game entities
//!
//! Entities validate their arguments once, when they are built. Anything that
//! goes wrong *after* construction (a full pack, a missing item, eating a
//! shovel) is reported through return values and narration instead.
//!
//! # Rust Learning Notes
//!
//! - **thiserror**: derives `Display` and `std::error::Error` from the
//!   `#[error(...)]` attributes, replacing a hand-written `impl fmt::Display`
//! - **Struct variants**: each error carries the field name that failed, so a
//!   caller can report exactly which argument was wrong

use thiserror::Error;

/// Errors raised while constructing items, players, and zombies
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntityError {
    /// An argument is not of the expected semantic type
    /// (empty name, NaN where a number belongs, a JSON string for a damage value)
    #[error("{field} must be {expected}")]
    TypeConstraint {
        field: &'static str,
        expected: &'static str,
    },

    /// A numeric argument is outside its allowed range
    #[error("{field} {reason}")]
    RangeConstraint {
        field: &'static str,
        reason: &'static str,
    },
}

impl EntityError {
    pub(crate) fn not_text(field: &'static str) -> Self {
        EntityError::TypeConstraint {
            field,
            expected: "a non-empty String",
        }
    }

    pub(crate) fn not_number(field: &'static str) -> Self {
        EntityError::TypeConstraint {
            field,
            expected: "a Number",
        }
    }
}

/// Checks that a name is usable text
pub(crate) fn require_name(field: &'static str, name: impl Into<String>) -> Result<String, EntityError> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(EntityError::not_text(field));
    }
    Ok(name)
}

/// Checks that a stat is a real number (not NaN or infinite)
pub(crate) fn require_number(field: &'static str, value: f64) -> Result<f64, EntityError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EntityError::not_number(field))
    }
}
