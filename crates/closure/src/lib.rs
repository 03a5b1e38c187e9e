//! RelNorm Closure Library
//!
//! This crate provides the analysis primitives every other RelNorm stage is
//! built on:
//!
//! - [`closure`]: the attribute-set closure X⁺ under a set of functional
//!   dependencies, computed by fixed-point iteration.
//! - [`non_empty_subsets`]: deterministic enumeration of the non-empty
//!   subsets of an attribute set.
//! - [`candidate_keys`]: exhaustive discovery of the minimal superkeys of a
//!   relation schema.

pub mod closure;
pub mod keys;
pub mod subsets;

pub use closure::{closure, is_superkey};
pub use keys::{candidate_keys, prime_attributes};
pub use subsets::{non_empty_subsets, NonEmptySubsets};

#[cfg(test)]
mod tests;
