//! Immutable HTML tree values and their serializer.
//!
//! Sections of a document are built as plain [`Node`] values and composed by
//! concatenation; the whole tree is serialized exactly once at the end.
//! There is no shared mutable state between renders.

mod node;
mod serialize;

pub use node::*;
pub use serialize::*;
