//! Core record types, money/tax arithmetic, and deterministic date formatting.
//!
//! Everything here is pure: given the same record and clock value, the
//! downstream document render is byte-identical.

pub mod dates;
mod error;
mod money;
mod types;

pub use error::*;
pub use money::*;
pub use types::*;
