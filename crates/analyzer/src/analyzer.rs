//! Orchestration of the full normalization pipeline.

use crate::report::Report;
use classifier::classify;
use closure::candidate_keys;
use closure::closure as compute_closure;
use closure::non_empty_subsets;
use cover::{merge_by_lhs, minimal_cover};
use decomposer::{decompose_2nf, decompose_3nf, decompose_bcnf};
use schema::RelationSchema;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Default attribute-count cap under which all subset closures are exposed.
///
/// The cap gates only the display map; candidate-key discovery runs
/// regardless (bounded by the subset enumerator's bit width).
pub const SUBSET_CLOSURE_CAP: usize = 8;

/// Runs the full analysis pipeline over a relation schema.
#[derive(Debug, Clone)]
pub struct Analyzer {
    subset_closure_cap: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            subset_closure_cap: SUBSET_CLOSURE_CAP,
        }
    }
}

impl Analyzer {
    /// Analyzer with a custom subset-closure display cap.
    #[must_use]
    pub fn new(subset_closure_cap: usize) -> Self {
        Self { subset_closure_cap }
    }

    /// Run every analysis stage and assemble the report.
    ///
    /// Stateless: the schema is only read, and nothing persists between
    /// calls.
    #[must_use]
    pub fn analyze(&self, schema: &RelationSchema) -> Report {
        let universe = schema.universe();
        let fds = schema.fds();
        let mut diagnostics = Vec::new();

        let closure_of_all = compute_closure(universe, fds);
        debug!("closure of {universe} is {closure_of_all}");

        let subset_closures = (universe.len() <= self.subset_closure_cap).then(|| {
            non_empty_subsets(universe)
                .map(|subset| {
                    let subset_closure = compute_closure(&subset, fds);
                    (subset.canonical(), subset_closure)
                })
                .collect::<BTreeMap<_, _>>()
        });

        let keys = candidate_keys(universe, fds);
        if keys.is_empty() && !universe.is_empty() {
            diagnostics.push(format!(
                "key discovery produced no candidate keys for {universe}"
            ));
        }

        let cover = merge_by_lhs(&minimal_cover(fds));
        let normal_forms = classify(universe, fds, &keys);

        let decomposition_2nf =
            (!normal_forms.is_2nf()).then(|| decompose_2nf(universe, fds, &keys));
        let (decomposition_3nf, decomposition_bcnf) = if normal_forms.is_bcnf() {
            (None, None)
        } else {
            let synthesis = decompose_3nf(universe, fds, &keys);
            if let Some(key) = synthesis.appended_key() {
                diagnostics.push(format!(
                    "3NF synthesis appended the candidate key fragment {key}"
                ));
            }
            (
                Some(synthesis.into_fragments()),
                Some(decompose_bcnf(universe, fds)),
            )
        };

        info!(
            "analyzed {universe}: {} candidate keys, {} cover dependencies, highest form {}",
            keys.len(),
            cover.len(),
            normal_forms.highest_form()
        );

        Report {
            universe: universe.clone(),
            closure_of_all,
            subset_closures,
            candidate_keys: keys,
            minimal_cover: cover,
            normal_forms,
            decomposition_2nf,
            decomposition_3nf,
            decomposition_bcnf,
            diagnostics,
        }
    }
}
