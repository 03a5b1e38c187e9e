//! Recursive BCNF analysis over a fragment work-list.

use crate::fragments::finalize;
use closure::closure;
use schema::{AttributeSet, Fd};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Decompose a schema into BCNF fragments; lossless by construction,
/// dependency preservation not guaranteed.
///
/// Work-list algorithm: pop a fragment, find the first dependency that
/// applies within it whose determinant does not determine the whole
/// fragment, and split on it; a fragment with no such dependency is
/// emitted. Each split strictly shrinks both parts, and a visited set on
/// canonical forms prevents reprocessing fragments reached along different
/// paths, so the loop terminates.
#[must_use]
pub fn decompose_bcnf(universe: &AttributeSet, fds: &[Fd]) -> Vec<AttributeSet> {
    if universe.is_empty() {
        return Vec::new();
    }
    if fds.is_empty() {
        return vec![universe.clone()];
    }

    let mut pending: VecDeque<AttributeSet> = VecDeque::from([universe.clone()]);
    let mut visited: HashSet<String> = HashSet::new();
    let mut output: Vec<AttributeSet> = Vec::new();

    while let Some(fragment) = pending.pop_front() {
        if !visited.insert(fragment.canonical()) {
            continue;
        }

        match find_violation(&fragment, fds) {
            Some(fd) => {
                // Split S into (L ∪ R) ∩ S and L ∪ (S \ R); the shared
                // determinant L makes the join of the parts lossless.
                let grouped = fd.attributes().intersection(&fragment);
                let rest = fd.lhs().union(&fragment.difference(fd.rhs()));
                debug!("splitting {fragment} on {fd} into {grouped} and {rest}");
                for part in [grouped, rest] {
                    if !part.is_empty() {
                        pending.push_back(part);
                    }
                }
            }
            None => output.push(fragment),
        }
    }

    finalize(output)
}

/// First dependency violating BCNF within `fragment`, in input order.
///
/// A dependency applies when both sides fall inside the fragment; admitted
/// dependencies have disjoint sides, so any applicable dependency is
/// non-trivial there. It violates BCNF iff its determinant's closure,
/// projected onto the fragment, falls short of the whole fragment.
fn find_violation<'a>(fragment: &AttributeSet, fds: &'a [Fd]) -> Option<&'a Fd> {
    fds.iter().find(|fd| {
        fd.applies_within(fragment)
            && closure(fd.lhs(), fds).intersection(fragment) != *fragment
    })
}
