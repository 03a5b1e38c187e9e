//! RelNorm Decomposer Library
//!
//! Lossless decomposition strategies over a relation schema:
//!
//! - [`decompose_2nf`]: splits partial dependencies of non-prime attributes
//!   off the candidate keys.
//! - [`decompose_3nf`]: classic synthesis from a minimal cover, guaranteed
//!   lossless and dependency-preserving.
//! - [`decompose_bcnf`]: recursive analysis splitting on violating
//!   dependencies; lossless, dependency preservation not guaranteed.
//!
//! Every strategy returns fragments with no fragment a subset of another,
//! ordered by (size descending, canonical serialization ascending).

pub mod bcnf;
mod fragments;
pub mod second_nf;
pub mod third_nf;

pub use bcnf::decompose_bcnf;
pub use second_nf::decompose_2nf;
pub use third_nf::{decompose_3nf, Synthesis};
