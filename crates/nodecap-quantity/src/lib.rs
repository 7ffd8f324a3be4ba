//! nodecap-quantity — exact resource arithmetic for capacity planning.
//!
//! `Quantity` is an integer-backed, unit-tagged amount: CPU in millicores,
//! memory in bytes. Arithmetic and comparison are exact and infallible
//! within one unit family; parsing human literals ("800m", "2Gi") is
//! fallible and confined to configuration and snapshot boundaries.

pub mod error;
pub mod literal;
pub mod quantity;

pub use error::{QuantityError, QuantityResult};
pub use quantity::{Quantity, ResourceKind};
