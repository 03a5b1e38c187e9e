//! Unordered attribute collections with canonical serialization.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An unordered collection of distinct attributes.
///
/// Backed by a `BTreeSet`, so iteration is always in byte-wise lexicographic
/// order. The canonical serialization (attributes joined by `", "`) is the
/// only representation used as a map key or compared across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttributeSet(BTreeSet<String>);

impl AttributeSet {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Create a set holding a single attribute.
    #[must_use]
    pub fn singleton(attribute: impl Into<String>) -> Self {
        let mut set = BTreeSet::new();
        set.insert(attribute.into());
        Self(set)
    }

    /// Insert an attribute; returns whether it was newly added.
    pub fn insert(&mut self, attribute: impl Into<String>) -> bool {
        self.0.insert(attribute.into())
    }

    /// Membership test (exact, case-sensitive match).
    #[must_use]
    #[inline]
    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains(attribute)
    }

    /// Number of attributes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate attributes in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Union with another set, producing a new set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Intersection with another set, producing a new set.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Attributes of `self` not present in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Copy of `self` with one attribute removed.
    #[must_use]
    pub fn without(&self, attribute: &str) -> Self {
        let mut set = self.0.clone();
        set.remove(attribute);
        Self(set)
    }

    /// Absorb all attributes of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        self.0.extend(other.0.iter().cloned());
    }

    #[must_use]
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    #[must_use]
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && self.0.is_subset(&other.0)
    }

    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Canonical serialization: attributes in lexicographic order joined by
    /// `", "`. Stable across runs for a given set.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.0.iter().join(", ")
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.canonical())
    }
}
