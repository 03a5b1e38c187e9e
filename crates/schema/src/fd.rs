//! Functional dependencies and their admission rules.

use crate::{AttributeSet, SchemaError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A functional dependency: an ordered pair of non-empty attribute sets.
///
/// Invariants after admission: both sides non-empty and the right-hand side
/// disjoint from the left-hand side. Two dependencies are equal iff both
/// sides are set-equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fd {
    lhs: AttributeSet,
    rhs: AttributeSet,
}

impl Fd {
    /// Build a dependency from parts already satisfying the invariants.
    ///
    /// Violations are programming errors; use [`Fd::admit`] for caller input.
    #[must_use]
    pub fn new(lhs: AttributeSet, rhs: AttributeSet) -> Self {
        debug_assert!(!lhs.is_empty(), "dependency with an empty left-hand side");
        debug_assert!(!rhs.is_empty(), "dependency with an empty right-hand side");
        debug_assert!(
            rhs.intersection(&lhs).is_empty(),
            "dependency sides must be disjoint after admission"
        );
        Self { lhs, rhs }
    }

    /// Admit a caller-supplied dependency.
    ///
    /// Strips right-hand attributes already present on the left; rejects
    /// empty sides and dependencies that become trivial after stripping.
    pub fn admit(lhs: AttributeSet, rhs: AttributeSet) -> Result<Self, SchemaError> {
        if lhs.is_empty() {
            return Err(SchemaError::EmptyLhs);
        }
        if rhs.is_empty() {
            return Err(SchemaError::EmptyRhs);
        }
        let stripped = rhs.difference(&lhs);
        if stripped.is_empty() {
            return Err(SchemaError::Trivial(format!(
                "{} -> {}",
                lhs.canonical(),
                rhs.canonical()
            )));
        }
        Ok(Self {
            lhs,
            rhs: stripped,
        })
    }

    /// Determinant (left-hand side).
    #[must_use]
    #[inline]
    pub fn lhs(&self) -> &AttributeSet {
        &self.lhs
    }

    /// Dependent attributes (right-hand side).
    #[must_use]
    #[inline]
    pub fn rhs(&self) -> &AttributeSet {
        &self.rhs
    }

    /// All attributes mentioned by this dependency.
    #[must_use]
    pub fn attributes(&self) -> AttributeSet {
        self.lhs.union(&self.rhs)
    }

    /// Whether both sides fall within the given fragment.
    #[must_use]
    pub fn applies_within(&self, fragment: &AttributeSet) -> bool {
        self.lhs.is_subset(fragment) && self.rhs.is_subset(fragment)
    }

    /// Split into one dependency per right-hand attribute.
    #[must_use]
    pub fn split_rhs(&self) -> Vec<Self> {
        self.rhs
            .iter()
            .map(|attribute| Self::new(self.lhs.clone(), AttributeSet::singleton(attribute)))
            .collect()
    }

    /// Derived fingerprint identifying this dependency in logs.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        common::compute_fp(self)
    }
}

impl fmt::Display for Fd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs.canonical(), self.rhs.canonical())
    }
}
