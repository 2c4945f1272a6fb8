//! `GraphStore` implementation for `Neo4jClient`.
//!
//! Every method simply delegates to the corresponding inherent method on `Neo4jClient`.

use async_trait::async_trait;
use std::collections::HashSet;

use super::client::Neo4jClient;
use super::traits::GraphStore;
use crate::correlator::Protein;

#[async_trait]
impl GraphStore for Neo4jClient {
    async fn upsert_protein(&self, entry: &str) -> anyhow::Result<()> {
        self.upsert_protein(entry).await
    }

    async fn upsert_protein_with_correlations(&self, protein: &Protein) -> anyhow::Result<()> {
        self.upsert_protein_with_correlations(protein).await
    }

    async fn get_protein(&self, entry: &str) -> anyhow::Result<Option<Protein>> {
        self.get_protein(entry).await
    }

    async fn get_neighbors(&self, entry: &str) -> anyhow::Result<HashSet<String>> {
        self.get_neighbors(entry).await
    }
}
