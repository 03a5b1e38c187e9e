//! Fixed-point computation of attribute-set closures.

use schema::{AttributeSet, Fd};

/// Compute the closure X⁺ of `seed` under `fds`.
///
/// Repeats full passes over the dependencies, absorbing the right-hand side
/// of every dependency whose left-hand side is already covered, until a pass
/// adds nothing. The fixed point is unique, so iteration order within a pass
/// is irrelevant. Terminates because the result grows monotonically and is
/// bounded by the attributes mentioned by `seed` and `fds`.
///
/// An empty seed stays empty (no admitted dependency has an empty
/// left-hand side); with no dependencies the closure is the seed itself.
#[must_use]
pub fn closure(seed: &AttributeSet, fds: &[Fd]) -> AttributeSet {
    let mut result = seed.clone();
    loop {
        let before = result.len();
        for fd in fds {
            if fd.lhs().is_subset(&result) && !fd.rhs().is_subset(&result) {
                result.merge(fd.rhs());
            }
        }
        if result.len() == before {
            return result;
        }
    }
}

/// Whether `candidate` functionally determines the whole `universe`.
#[must_use]
pub fn is_superkey(candidate: &AttributeSet, universe: &AttributeSet, fds: &[Fd]) -> bool {
    closure(candidate, fds) == *universe
}
