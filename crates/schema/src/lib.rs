//! RelNorm Schema Library
//!
//! The structured data model for the RelNorm normalization engine:
//! attribute sets, functional dependencies, and relation schemas.
//! Provides the admission layer that validates dependencies before any
//! analysis runs; the analyses themselves live in the sibling crates.

pub mod attribute_set;
pub mod error;
pub mod fd;
pub mod relation;

// Re-export core types for convenient access
pub use attribute_set::AttributeSet;
pub use error::SchemaError;
pub use fd::Fd;
pub use relation::RelationSchema;
