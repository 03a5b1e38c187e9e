//! The structured result of one normalization analysis.

use classifier::Classification;
use itertools::Itertools;
use schema::{AttributeSet, Fd};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Everything the engine derives from a relation schema in one pass.
///
/// Decomposition fields are present only when the corresponding target is
/// meaningful: 2NF when the schema is not in 2NF, 3NF and BCNF when the
/// schema is not in BCNF. The subset-closure map is present only when the
/// universe is small enough to enumerate for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub(crate) universe: AttributeSet,
    pub(crate) closure_of_all: AttributeSet,
    pub(crate) subset_closures: Option<BTreeMap<String, AttributeSet>>,
    pub(crate) candidate_keys: Vec<AttributeSet>,
    pub(crate) minimal_cover: Vec<Fd>,
    pub(crate) normal_forms: Classification,
    pub(crate) decomposition_2nf: Option<Vec<AttributeSet>>,
    pub(crate) decomposition_3nf: Option<Vec<AttributeSet>>,
    pub(crate) decomposition_bcnf: Option<Vec<AttributeSet>>,
    pub(crate) diagnostics: Vec<String>,
}

impl Report {
    /// The analyzed universe, including attributes pulled in by FDs.
    #[must_use]
    #[inline]
    pub fn universe(&self) -> &AttributeSet {
        &self.universe
    }

    /// A⁺ under the schema's dependencies (always the universe itself).
    #[must_use]
    #[inline]
    pub fn closure_of_all(&self) -> &AttributeSet {
        &self.closure_of_all
    }

    /// Closure of every non-empty subset, keyed by canonical form; present
    /// iff the universe is within the configured cap.
    #[must_use]
    pub fn subset_closures(&self) -> Option<&BTreeMap<String, AttributeSet>> {
        self.subset_closures.as_ref()
    }

    /// Candidate keys, sorted by (size, canonical serialization).
    #[must_use]
    pub fn candidate_keys(&self) -> &[AttributeSet] {
        &self.candidate_keys
    }

    /// Minimal cover of the dependencies, consolidated by left-hand side.
    #[must_use]
    pub fn minimal_cover(&self) -> &[Fd] {
        &self.minimal_cover
    }

    /// Normal-form flags and violation witnesses.
    #[must_use]
    #[inline]
    pub fn normal_forms(&self) -> &Classification {
        &self.normal_forms
    }

    /// Present iff the schema is not in 2NF.
    #[must_use]
    pub fn decomposition_2nf(&self) -> Option<&[AttributeSet]> {
        self.decomposition_2nf.as_deref()
    }

    /// Present iff the schema is not in BCNF.
    #[must_use]
    pub fn decomposition_3nf(&self) -> Option<&[AttributeSet]> {
        self.decomposition_3nf.as_deref()
    }

    /// Present iff the schema is not in BCNF.
    #[must_use]
    pub fn decomposition_bcnf(&self) -> Option<&[AttributeSet]> {
        self.decomposition_bcnf.as_deref()
    }

    /// Non-fatal diagnostics recorded during the analysis.
    #[must_use]
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fragments = |list: &[AttributeSet]| list.iter().map(AttributeSet::to_string).join(", ");

        writeln!(f, "universe: {}", self.universe)?;
        writeln!(f, "closure of universe: {}", self.closure_of_all)?;
        writeln!(f, "candidate keys: [{}]", fragments(&self.candidate_keys))?;
        writeln!(f, "{}", "-".repeat(45))?;

        writeln!(f, "minimal cover:")?;
        for fd in &self.minimal_cover {
            writeln!(f, "  {fd}")?;
        }
        writeln!(f, "{}", "-".repeat(45))?;
        writeln!(f, "{}", self.normal_forms)?;

        if let Some(fragments_2nf) = &self.decomposition_2nf {
            writeln!(f, "2NF decomposition: [{}]", fragments(fragments_2nf))?;
        }
        if let Some(fragments_3nf) = &self.decomposition_3nf {
            writeln!(f, "3NF decomposition: [{}]", fragments(fragments_3nf))?;
        }
        if let Some(fragments_bcnf) = &self.decomposition_bcnf {
            writeln!(f, "BCNF decomposition: [{}]", fragments(fragments_bcnf))?;
        }

        if let Some(closures) = &self.subset_closures {
            writeln!(f, "{}", "-".repeat(45))?;
            writeln!(f, "subset closures:")?;
            for (subset, closure) in closures {
                writeln!(f, "  {{{subset}}}+ = {closure}")?;
            }
        }

        for diagnostic in &self.diagnostics {
            writeln!(f, "diagnostic: {diagnostic}")?;
        }
        Ok(())
    }
}
