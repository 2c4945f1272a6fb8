//! GraphStore trait definition
//!
//! Abstract interface over the graph database, mirroring the public async
//! methods of `Neo4jClient`. Enables testing with an in-memory mock and
//! keeps the correlation engine independent of the storage technology.

use crate::correlator::Protein;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// Abstract interface for protein graph persistence.
///
/// All operations are idempotent upserts or pure reads; the store is the
/// sole arbiter for concurrent writes to the same entry.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Create-or-return a protein node keyed by `entry`.
    async fn upsert_protein(&self, entry: &str) -> Result<()>;

    /// Persist a protein together with its correlation-set membership,
    /// merging with any existing edges for that node (union, not replace).
    async fn upsert_protein_with_correlations(&self, protein: &Protein) -> Result<()>;

    /// Point lookup by entry, with the outbound correlation set populated.
    async fn get_protein(&self, entry: &str) -> Result<Option<Protein>>;

    /// One-hop traversal: entries of all proteins `entry` correlates with.
    async fn get_neighbors(&self, entry: &str) -> Result<HashSet<String>>;
}
