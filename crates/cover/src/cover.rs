//! Three-phase minimal-cover construction.

use closure::closure;
use schema::{AttributeSet, Fd};
use tracing::debug;

/// Build a minimal cover of `fds`.
///
/// Three phases, in order:
/// 1. split every right-hand side into singletons;
/// 2. drop extraneous left-hand attributes — `x` is removable from
///    `L -> a` iff `a ∈ (L \ {x})⁺` under the current working set, applying
///    each removal before trying the next attribute;
/// 3. drop redundant dependencies — `L -> a` goes iff `a ∈ L⁺` under the
///    working set with that dependency excluded.
///
/// The working set is sorted by (canonical LHS, canonical RHS) after the
/// split, so the result is deterministic regardless of input order. Any
/// processing order yields *a* minimal cover; this one fixes which.
#[must_use]
pub fn minimal_cover(fds: &[Fd]) -> Vec<Fd> {
    let mut working: Vec<Fd> = fds.iter().flat_map(Fd::split_rhs).collect();
    working.sort_by(|a, b| {
        a.lhs()
            .canonical()
            .cmp(&b.lhs().canonical())
            .then_with(|| a.rhs().canonical().cmp(&b.rhs().canonical()))
    });

    reduce_lhs(&mut working);
    drop_redundant(&mut working);
    working
}

/// Consolidate dependencies sharing a left-hand side into one dependency
/// with the union of their right-hand sides.
///
/// Presentation step only; consumers needing singleton right-hand sides
/// must re-split. First-occurrence order of each left-hand side is kept.
#[must_use]
pub fn merge_by_lhs(fds: &[Fd]) -> Vec<Fd> {
    let mut merged: Vec<Fd> = Vec::new();
    for fd in fds {
        match merged.iter_mut().find(|prior| prior.lhs() == fd.lhs()) {
            Some(prior) => {
                *prior = Fd::new(prior.lhs().clone(), prior.rhs().union(fd.rhs()));
            }
            None => merged.push(fd.clone()),
        }
    }
    merged
}

/// Phase 2: left-hand reduction against the current working set.
///
/// The closure check runs with the dependency under reduction still in the
/// set: we are testing whether its target stays derivable from the smaller
/// determinant, not whether the dependency is redundant. A determinant is
/// never reduced to empty.
fn reduce_lhs(working: &mut Vec<Fd>) {
    for index in 0..working.len() {
        let candidates: Vec<String> = working[index].lhs().iter().map(str::to_owned).collect();
        for attribute in candidates {
            if working[index].lhs().len() == 1 {
                break;
            }
            let reduced = working[index].lhs().without(&attribute);
            if working[index].rhs().is_subset(&closure(&reduced, working)) {
                debug!(
                    "dropping extraneous attribute {attribute} from {}",
                    working[index]
                );
                let rhs = working[index].rhs().clone();
                working[index] = Fd::new(reduced, rhs);
            }
        }
    }
}

/// Phase 3: redundancy elimination, each dependency checked against the
/// working set with itself excluded.
fn drop_redundant(working: &mut Vec<Fd>) {
    let mut index = 0;
    while index < working.len() {
        let rest: Vec<Fd> = working
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .map(|(_, fd)| fd.clone())
            .collect();

        if working[index].rhs().is_subset(&closure(working[index].lhs(), &rest)) {
            debug!("dropping redundant dependency {}", working[index]);
            working.remove(index);
        } else {
            index += 1;
        }
    }
}

/// Helper for equivalence assertions: X⁺ agrees under two dependency sets.
#[must_use]
pub fn same_closure(seed: &AttributeSet, left: &[Fd], right: &[Fd]) -> bool {
    closure(seed, left) == closure(seed, right)
}
