//! 3NF synthesis from a minimal cover.

use crate::fragments::finalize;
use cover::{merge_by_lhs, minimal_cover};
use schema::{AttributeSet, Fd};
use tracing::{debug, warn};

/// Outcome of a 3NF synthesis run.
///
/// Records whether the key-repair step fired so callers can surface a
/// diagnostic alongside the fragments.
#[derive(Debug, Clone)]
pub struct Synthesis {
    fragments: Vec<AttributeSet>,
    appended_key: Option<AttributeSet>,
}

impl Synthesis {
    #[must_use]
    pub fn fragments(&self) -> &[AttributeSet] {
        &self.fragments
    }

    /// The candidate key appended because no synthesized fragment covered
    /// one, if that repair was needed.
    #[must_use]
    pub fn appended_key(&self) -> Option<&AttributeSet> {
        self.appended_key.as_ref()
    }

    #[must_use]
    pub fn into_fragments(self) -> Vec<AttributeSet> {
        self.fragments
    }
}

/// Synthesize a lossless, dependency-preserving 3NF decomposition.
///
/// One fragment per dependency of the LHS-merged minimal cover (determinant
/// union dependents). If no fragment contains a candidate key, the first
/// key under the (size, canonical) order is appended; the key fragment is
/// what makes the join lossless. A dependency-free schema collapses to a
/// single fragment holding the whole universe.
#[must_use]
pub fn decompose_3nf(universe: &AttributeSet, fds: &[Fd], keys: &[AttributeSet]) -> Synthesis {
    if fds.is_empty() {
        let fragments = if universe.is_empty() {
            Vec::new()
        } else {
            vec![universe.clone()]
        };
        return Synthesis {
            fragments,
            appended_key: None,
        };
    }

    let cover = merge_by_lhs(&minimal_cover(fds));
    let mut fragments: Vec<AttributeSet> = cover.iter().map(Fd::attributes).collect();
    debug!("synthesized {} fragments from the minimal cover", fragments.len());

    let mut appended_key = None;
    let covers_a_key = fragments
        .iter()
        .any(|fragment| keys.iter().any(|key| key.is_subset(fragment)));
    if !covers_a_key {
        if let Some(key) = keys.first() {
            warn!("no synthesized fragment covers a candidate key; appending {key}");
            fragments.push(key.clone());
            appended_key = Some(key.clone());
        }
    }

    Synthesis {
        fragments: finalize(fragments),
        appended_key,
    }
}
