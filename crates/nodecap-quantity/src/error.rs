//! Quantity error types.

use thiserror::Error;

use crate::quantity::ResourceKind;

/// Result type alias for quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Errors that can occur when constructing or combining quantities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Two quantities of different unit families were combined. This is a
    /// wiring defect, not a data error.
    #[error("mismatched resource kinds: {left} and {right}")]
    UnitMismatch {
        left: ResourceKind,
        right: ResourceKind,
    },

    /// A human-readable literal could not be parsed for the given family.
    #[error("invalid {kind} quantity literal {literal:?}")]
    InvalidLiteral {
        kind: ResourceKind,
        literal: String,
    },
}
