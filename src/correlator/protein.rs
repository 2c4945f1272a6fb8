//! Protein node entity and edge-admission policy

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Jaccard coefficient above which a correlation edge is admitted (strict `>`).
pub const CORRELATION_THRESHOLD: f64 = 0.4;

/// A protein node in the correlation graph.
///
/// Identity is the `entry` accession key. The correlated set holds the entries
/// of proteins this one has an outbound `CORRELATES` edge to; it only grows,
/// and only when a similarity score clears [`CORRELATION_THRESHOLD`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Protein {
    pub entry: String,
    #[serde(default)]
    pub correlated: HashSet<String>,
}

impl Protein {
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            correlated: HashSet::new(),
        }
    }

    /// Admit `candidate` into the correlation set iff `score` exceeds the
    /// threshold. No-op otherwise. Idempotent: re-admitting an already
    /// correlated entry leaves the set unchanged.
    pub fn correlate_with(&mut self, candidate: &str, score: f64) {
        if score > CORRELATION_THRESHOLD {
            self.correlated.insert(candidate.to_string());
        }
    }
}

// Equality by entry only. Callers compare proteins that may carry partially
// loaded correlation sets, and those must still compare equal.
impl PartialEq for Protein {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

impl Eq for Protein {}

impl Hash for Protein {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entry.hash(state);
    }
}
