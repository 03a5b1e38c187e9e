//! Candidate-key discovery by exhaustive superkey search.

use crate::{is_superkey, non_empty_subsets};
use itertools::Itertools;
use schema::{AttributeSet, Fd};
use tracing::{debug, warn};

/// Every candidate key of the relation (universe, fds), sorted by
/// (size ascending, canonical serialization ascending).
///
/// Collects all superkeys by exhaustive subset enumeration, then keeps the
/// minimal ones: a superkey is a candidate key iff no other collected
/// superkey is a proper subset of it. An empty universe has no keys.
#[must_use]
pub fn candidate_keys(universe: &AttributeSet, fds: &[Fd]) -> Vec<AttributeSet> {
    if universe.is_empty() {
        return Vec::new();
    }

    let superkeys: Vec<AttributeSet> = non_empty_subsets(universe)
        .filter(|subset| is_superkey(subset, universe, fds))
        .collect();

    if superkeys.is_empty() {
        // Unreachable when the closure definition holds (X ⊆ X⁺ makes the
        // universe its own superkey); kept as a guarded fallback.
        warn!("no superkey found for non-empty universe {universe}; falling back to the full attribute set");
        return vec![universe.clone()];
    }

    let mut keys: Vec<AttributeSet> = superkeys
        .iter()
        .filter(|candidate| {
            !superkeys
                .iter()
                .any(|other| other.is_proper_subset(candidate))
        })
        .cloned()
        .collect();

    keys.sort_by(|a, b| {
        a.len()
            .cmp(&b.len())
            .then_with(|| a.canonical().cmp(&b.canonical()))
    });
    keys.dedup();

    debug!(
        "candidate keys of {universe}: [{}]",
        keys.iter().map(AttributeSet::to_string).join(", ")
    );
    keys
}

/// The prime attributes: the union of all candidate keys.
#[must_use]
pub fn prime_attributes(keys: &[AttributeSet]) -> AttributeSet {
    let mut prime = AttributeSet::new();
    for key in keys {
        prime.merge(key);
    }
    prime
}
