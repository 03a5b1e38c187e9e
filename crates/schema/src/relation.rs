//! Relation schema representation and normalization on construction.

use crate::{AttributeSet, Fd};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// A relation schema: an attribute universe plus a set of admitted
/// functional dependencies.
///
/// Construction normalizes the pair: duplicate dependencies are dropped and
/// the universe is extended with every attribute mentioned by a dependency,
/// so afterwards each dependency ranges over the universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSchema {
    universe: AttributeSet,
    fds: Vec<Fd>,
}

impl RelationSchema {
    /// Build a schema from a caller-supplied universe and admitted
    /// dependencies, logging dropped duplicates.
    #[must_use]
    pub fn new(universe: AttributeSet, fds: Vec<Fd>) -> Self {
        let mut seen: HashSet<Fd> = HashSet::with_capacity(fds.len());
        let mut kept = Vec::with_capacity(fds.len());
        let mut universe = universe;

        for fd in fds {
            if !seen.insert(fd.clone()) {
                warn!("dropping duplicate dependency {} (fp 0x{:016x})", fd, fd.fingerprint());
                continue;
            }
            universe.merge(&fd.attributes());
            kept.push(fd);
        }

        Self {
            universe,
            fds: kept,
        }
    }

    /// The attribute universe (includes every attribute used by an FD).
    #[must_use]
    #[inline]
    pub fn universe(&self) -> &AttributeSet {
        &self.universe
    }

    /// The admitted dependencies, in input order.
    #[must_use]
    #[inline]
    pub fn fds(&self) -> &[Fd] {
        &self.fds
    }
}

impl fmt::Display for RelationSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "universe: {}", self.universe)?;
        for fd in &self.fds {
            writeln!(f, "{fd}")?;
        }
        Ok(())
    }
}
