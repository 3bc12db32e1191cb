//! Printable document construction: one record in, one HTML string out.
//!
//! Each section is a small builder returning an immutable [`crate::html::Node`];
//! the sections are concatenated into a root node and serialized once.

mod assets;
mod builder;
mod style;

pub use assets::*;
pub use builder::*;
