//! RelNorm Cover Library
//!
//! Builds a minimal (canonical) cover of a set of functional dependencies:
//! singleton right-hand sides, no extraneous left-hand attributes, no
//! redundant dependencies, equivalent to the input for every closure.

pub mod cover;

pub use cover::{merge_by_lhs, minimal_cover, same_closure};
