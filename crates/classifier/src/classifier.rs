//! Normal-form tests per functional dependency.

use closure::{is_superkey, prime_attributes};
use itertools::Itertools;
use schema::{AttributeSet, Fd};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Outcome of classifying a schema: one flag per normal form plus the
/// violating dependencies recorded per form, in input order.
///
/// BCNF implies 3NF implies 2NF, so the violation lists are nested: a
/// dependency recorded against 2NF also appears against 3NF and BCNF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    is_bcnf: bool,
    is_3nf: bool,
    is_2nf: bool,
    bcnf_violations: Vec<Fd>,
    third_nf_violations: Vec<Fd>,
    second_nf_violations: Vec<Fd>,
}

impl Classification {
    /// Schema with nothing to violate: every flag holds.
    fn trivially_bcnf() -> Self {
        Self {
            is_bcnf: true,
            is_3nf: true,
            is_2nf: true,
            bcnf_violations: Vec::new(),
            third_nf_violations: Vec::new(),
            second_nf_violations: Vec::new(),
        }
    }

    /// Classification is undefined without candidate keys: every flag false.
    fn undetermined() -> Self {
        Self {
            is_bcnf: false,
            is_3nf: false,
            is_2nf: false,
            bcnf_violations: Vec::new(),
            third_nf_violations: Vec::new(),
            second_nf_violations: Vec::new(),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_bcnf(&self) -> bool {
        self.is_bcnf
    }

    #[must_use]
    #[inline]
    pub fn is_3nf(&self) -> bool {
        self.is_3nf
    }

    #[must_use]
    #[inline]
    pub fn is_2nf(&self) -> bool {
        self.is_2nf
    }

    /// Dependencies whose determinant is not a superkey.
    #[must_use]
    pub fn bcnf_violations(&self) -> &[Fd] {
        &self.bcnf_violations
    }

    /// BCNF violations whose dependents are not all prime.
    #[must_use]
    pub fn third_nf_violations(&self) -> &[Fd] {
        &self.third_nf_violations
    }

    /// Partial dependencies of non-prime attributes on a candidate key.
    #[must_use]
    pub fn second_nf_violations(&self) -> &[Fd] {
        &self.second_nf_violations
    }

    /// The strongest normal form satisfied, as a display label.
    #[must_use]
    pub fn highest_form(&self) -> &'static str {
        if self.is_bcnf {
            "BCNF"
        } else if self.is_3nf {
            "3NF"
        } else if self.is_2nf {
            "2NF"
        } else {
            "1NF"
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "highest normal form: {}", self.highest_form())?;
        let dump = |list: &[Fd]| list.iter().map(Fd::to_string).join("; ");
        writeln!(f, "BCNF violations: [{}]", dump(&self.bcnf_violations))?;
        writeln!(f, "3NF violations: [{}]", dump(&self.third_nf_violations))?;
        write!(f, "2NF violations: [{}]", dump(&self.second_nf_violations))
    }
}

/// Classify a schema against 2NF/3NF/BCNF.
///
/// Each non-trivial dependency is run through a cascade in input order: the
/// BCNF test (determinant is a superkey), then, when that fails, the 3NF
/// test (every dependent attribute is prime), then the 2NF test (a partial
/// dependency of a non-prime attribute on some candidate key).
///
/// An empty universe or empty dependency set is trivially BCNF. A non-empty
/// universe with no candidate keys leaves classification undefined: every
/// flag false.
#[must_use]
pub fn classify(universe: &AttributeSet, fds: &[Fd], keys: &[AttributeSet]) -> Classification {
    if universe.is_empty() || fds.is_empty() {
        return Classification::trivially_bcnf();
    }
    if keys.is_empty() {
        warn!("classification of {universe} requested without candidate keys");
        return Classification::undetermined();
    }

    let prime = prime_attributes(keys);
    let mut outcome = Classification::trivially_bcnf();

    for fd in fds {
        // Admission keeps the sides disjoint; the projection guards against
        // dependencies built through Fd::new.
        let dependents = fd.rhs().difference(fd.lhs());
        if dependents.is_empty() {
            continue;
        }

        if is_superkey(fd.lhs(), universe, fds) {
            continue;
        }
        outcome.bcnf_violations.push(fd.clone());

        if dependents.is_subset(&prime) {
            continue;
        }
        outcome.third_nf_violations.push(fd.clone());

        let partial = keys.iter().any(|key| fd.lhs().is_proper_subset(key));
        if partial {
            outcome.second_nf_violations.push(fd.clone());
        }
    }

    outcome.is_bcnf = outcome.bcnf_violations.is_empty();
    outcome.is_3nf = outcome.third_nf_violations.is_empty();
    outcome.is_2nf = outcome.second_nf_violations.is_empty();
    outcome
}
