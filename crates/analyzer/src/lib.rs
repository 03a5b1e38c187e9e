//! RelNorm Analyzer Library
//!
//! This crate orchestrates the full normalization analysis over a relation
//! schema and packages the results:
//!
//! - [`Analyzer`]: sequences closures, candidate keys, minimal cover,
//!   normal-form classification and the 2NF/3NF/BCNF decompositions.
//! - [`Report`]: the structured, serializable result of one analysis.
//! - [`demos`]: the bundled demo schemas driven by the `analyzer` binary.
//!
//! # Example
//! ```rust
//! use analyzer::Analyzer;
//! use schema::{AttributeSet, Fd, RelationSchema};
//!
//! let universe: AttributeSet = ["A", "B"].into_iter().collect();
//! let fd = Fd::admit(
//!     AttributeSet::singleton("A"),
//!     AttributeSet::singleton("B"),
//! ).expect("admissible");
//! let schema = RelationSchema::new(universe, vec![fd]);
//!
//! let report = Analyzer::default().analyze(&schema);
//! assert!(report.normal_forms().is_bcnf());
//! ```

pub mod analyzer;
pub mod demos;
pub mod report;

pub use analyzer::{Analyzer, SUBSET_CLOSURE_CAP};
pub use report::Report;
