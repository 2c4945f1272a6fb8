//! In-memory mock implementation of GraphStore for testing.
//!
//! Backed by a `tokio::sync::RwLock<HashMap<String, HashSet<String>>>`
//! mapping each protein entry to its outbound correlation set.
//! Conditionally compiled with `#[cfg(test)]`.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::correlator::Protein;
use crate::neo4j::traits::GraphStore;

/// In-memory mock implementation of GraphStore for testing.
pub struct MockGraphStore {
    proteins: RwLock<HashMap<String, HashSet<String>>>,
    fail_writes: bool,
}

impl MockGraphStore {
    /// Create a new empty MockGraphStore.
    pub fn new() -> Self {
        Self {
            proteins: RwLock::new(HashMap::new()),
            fail_writes: false,
        }
    }

    /// Create a mock whose write operations always fail, for exercising
    /// store-error propagation.
    pub fn failing() -> Self {
        Self {
            proteins: RwLock::new(HashMap::new()),
            fail_writes: true,
        }
    }

    /// Number of persisted protein nodes.
    pub async fn node_count(&self) -> usize {
        self.proteins.read().await.len()
    }
}

impl Default for MockGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphStore for MockGraphStore {
    async fn upsert_protein(&self, entry: &str) -> Result<()> {
        if self.fail_writes {
            bail!("mock store write failure");
        }
        self.proteins
            .write()
            .await
            .entry(entry.to_string())
            .or_default();
        Ok(())
    }

    async fn upsert_protein_with_correlations(&self, protein: &Protein) -> Result<()> {
        if self.fail_writes {
            bail!("mock store write failure");
        }
        let mut proteins = self.proteins.write().await;
        // Union with existing edges, and make sure every candidate node exists
        for candidate in &protein.correlated {
            proteins.entry(candidate.clone()).or_default();
        }
        proteins
            .entry(protein.entry.clone())
            .or_default()
            .extend(protein.correlated.iter().cloned());
        Ok(())
    }

    async fn get_protein(&self, entry: &str) -> Result<Option<Protein>> {
        Ok(self.proteins.read().await.get(entry).map(|correlated| Protein {
            entry: entry.to_string(),
            correlated: correlated.clone(),
        }))
    }

    async fn get_neighbors(&self, entry: &str) -> Result<HashSet<String>> {
        Ok(self
            .proteins
            .read()
            .await
            .get(entry)
            .cloned()
            .unwrap_or_default())
    }
}
