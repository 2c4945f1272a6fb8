//! Correlation engine: turns a similarity submission into graph mutations

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::CorrelatorError;
use super::protein::Protein;
use crate::neo4j::GraphStore;

/// One `(candidate entry, similarity score)` pair of a submission.
///
/// The PascalCase aliases exist because the gRPC bridge client posts
/// `{"Entry": ..., "Jaccard": ...}` while the frontend posts camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JaccardPair {
    #[serde(alias = "Entry")]
    pub entry: String,
    #[serde(alias = "Jaccard")]
    pub jaccard: f64,
}

/// A correlation submission: a main protein entry plus its measured
/// similarity pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationSubmission {
    #[serde(alias = "Entry")]
    pub entry: String,
    #[serde(default, alias = "JaccardCorrelations")]
    pub jaccard_correlations: Vec<JaccardPair>,
}

impl CorrelationSubmission {
    /// Reject submissions with an empty main entry, an empty candidate entry,
    /// or a non-finite score. Out-of-range finite scores are accepted and
    /// compared as-is.
    pub fn validate(&self) -> Result<(), CorrelatorError> {
        if self.entry.trim().is_empty() {
            return Err(CorrelatorError::Validation(
                "submission is missing a main protein entry".into(),
            ));
        }
        for pair in &self.jaccard_correlations {
            if pair.entry.trim().is_empty() {
                return Err(CorrelatorError::Validation(format!(
                    "correlation pair for '{}' is missing a candidate entry",
                    self.entry
                )));
            }
            if !pair.jaccard.is_finite() {
                return Err(CorrelatorError::Validation(format!(
                    "correlation pair ('{}', '{}') has a non-finite jaccard score",
                    self.entry, pair.entry
                )));
            }
        }
        Ok(())
    }
}

/// Stateless engine driving upserts into the graph store.
///
/// Writes are one-sided: only the main protein's outbound correlation set is
/// persisted per submission. A candidate's own set is untouched until that
/// candidate is itself submitted as a main protein.
#[derive(Clone)]
pub struct Correlator {
    store: Arc<dyn GraphStore>,
}

impl Correlator {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Process one submission: upsert every involved node, then persist the
    /// main protein together with its threshold-admitted edge set.
    ///
    /// All nodes are upserted before any edge write so that edge creation
    /// always references persisted nodes. No transaction spans the two
    /// phases; a failure in between leaves nodes without edges, and callers
    /// converge by retrying the whole submission.
    pub async fn correlate(&self, submission: &CorrelationSubmission) -> Result<(), CorrelatorError> {
        submission.validate()?;

        let mut main = Protein::new(&submission.entry);

        self.store.upsert_protein(&main.entry).await?;
        for pair in &submission.jaccard_correlations {
            self.store.upsert_protein(&pair.entry).await?;
        }
        tracing::debug!(entry = %main.entry, "persisted protein nodes");

        for pair in &submission.jaccard_correlations {
            main.correlate_with(&pair.entry, pair.jaccard);
            tracing::info!(
                main = %main.entry,
                candidate = %pair.entry,
                coefficient = pair.jaccard,
                "correlating"
            );
        }

        self.store.upsert_protein_with_correlations(&main).await?;
        tracing::debug!(entry = %main.entry, edges = main.correlated.len(), "persisted relationships");

        Ok(())
    }
}
