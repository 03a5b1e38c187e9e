//! 2NF repair: splitting partial dependencies off the candidate keys.

use crate::fragments::finalize;
use closure::prime_attributes;
use schema::{AttributeSet, Fd};
use tracing::debug;

/// Decompose a schema into 2NF fragments.
///
/// For each dependency whose determinant is a proper subset of some
/// candidate key and whose dependents include a non-prime attribute, the
/// determinant together with those non-prime dependents becomes a
/// fragment. The remaining attributes stay together with the first
/// candidate key. Lossless; dependency preservation is not guaranteed when
/// partial dependencies arise only transitively.
#[must_use]
pub fn decompose_2nf(universe: &AttributeSet, fds: &[Fd], keys: &[AttributeSet]) -> Vec<AttributeSet> {
    if universe.is_empty() {
        return Vec::new();
    }
    let Some(first_key) = keys.first() else {
        // Without keys there is no partial dependency to repair.
        return vec![universe.clone()];
    };

    let prime = prime_attributes(keys);
    let mut fragments: Vec<AttributeSet> = Vec::new();
    let mut moved = AttributeSet::new();

    for fd in fds {
        let partial = keys.iter().any(|key| fd.lhs().is_proper_subset(key));
        if !partial {
            continue;
        }
        let carried = fd.rhs().difference(&prime);
        if carried.is_empty() {
            continue;
        }
        debug!("splitting partial dependency {fd} off the key");
        fragments.push(fd.lhs().union(&carried));
        moved.merge(&carried);
    }

    // Keys are made of prime attributes, so the remainder always retains
    // the key; the union keeps that invariant explicit.
    let remainder = universe.difference(&moved).union(first_key);
    fragments.push(remainder);

    finalize(fragments)
}
