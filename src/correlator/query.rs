//! Read-only retrieval of a protein's correlated set

use std::collections::HashSet;
use std::sync::Arc;

use super::error::CorrelatorError;
use crate::neo4j::GraphStore;

/// Query service for one-hop neighborhood lookups. Never mutates the graph.
#[derive(Clone)]
pub struct CorrelationQuery {
    store: Arc<dyn GraphStore>,
}

impl CorrelationQuery {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Return the entries correlated with `entry`.
    ///
    /// An unknown entry is a `NotFound` error; a known entry with no edges
    /// returns an empty set.
    pub async fn correlations_for(&self, entry: &str) -> Result<HashSet<String>, CorrelatorError> {
        if entry.trim().is_empty() {
            return Err(CorrelatorError::Validation(
                "query entry must not be empty".into(),
            ));
        }

        if self.store.get_protein(entry).await?.is_none() {
            return Err(CorrelatorError::NotFound(entry.to_string()));
        }

        Ok(self.store.get_neighbors(entry).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlator::{CorrelationSubmission, Correlator, JaccardPair};
    use crate::neo4j::mock::MockGraphStore;

    async fn seeded_store() -> Arc<MockGraphStore> {
        let store = Arc::new(MockGraphStore::new());
        let correlator = Correlator::new(store.clone());
        correlator
            .correlate(&CorrelationSubmission {
                entry: "P1".into(),
                jaccard_correlations: vec![
                    JaccardPair {
                        entry: "P2".into(),
                        jaccard: 0.8,
                    },
                    JaccardPair {
                        entry: "P3".into(),
                        jaccard: 0.1,
                    },
                ],
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_returns_correlated_entries() {
        let query = CorrelationQuery::new(seeded_store().await);
        let correlations = query.correlations_for("P1").await.unwrap();
        assert_eq!(correlations, HashSet::from(["P2".to_string()]));
    }

    #[tokio::test]
    async fn test_known_entry_without_edges_returns_empty_set() {
        // P3 was upserted as a candidate but never gained an outbound edge
        let query = CorrelationQuery::new(seeded_store().await);
        let correlations = query.correlations_for("P3").await.unwrap();
        assert!(correlations.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_entry_is_not_found() {
        let query = CorrelationQuery::new(seeded_store().await);
        let err = query.correlations_for("P999").await.unwrap_err();
        assert!(matches!(err, CorrelatorError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_entry_is_rejected() {
        let query = CorrelationQuery::new(Arc::new(MockGraphStore::new()));
        let err = query.correlations_for("").await.unwrap_err();
        assert!(matches!(err, CorrelatorError::Validation(_)));
    }
}
