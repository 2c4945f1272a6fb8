//! Neo4j client for the protein correlation graph

use crate::correlator::Protein;
use anyhow::{Context, Result};
use neo4rs::{query, Graph};
use std::collections::HashSet;
use std::sync::Arc;

/// Client for Neo4j operations
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

impl Neo4jClient {
    /// Create a new Neo4j client
    pub async fn new(uri: &str, user: &str, password: &str) -> Result<Self> {
        let graph = Graph::new(uri, user, password)
            .await
            .context("Failed to connect to Neo4j")?;

        let client = Self {
            graph: Arc::new(graph),
        };

        // Initialize schema
        client.init_schema().await?;

        Ok(client)
    }

    /// Initialize the graph schema with constraints
    async fn init_schema(&self) -> Result<()> {
        let constraints = vec![
            "CREATE CONSTRAINT protein_entry IF NOT EXISTS FOR (p:Protein) REQUIRE p.entry IS UNIQUE",
        ];

        for constraint in constraints {
            self.graph
                .run(query(constraint))
                .await
                .with_context(|| format!("Failed to create constraint: {}", constraint))?;
        }

        Ok(())
    }

    /// Create-or-return a protein node keyed by entry
    pub async fn upsert_protein(&self, entry: &str) -> Result<()> {
        let q = query(
            r#"
            MERGE (p:Protein {entry: $entry})
            "#,
        )
        .param("entry", entry);

        self.graph.run(q).await?;
        Ok(())
    }

    /// Persist a protein with its correlation-set membership.
    ///
    /// Edges are MERGEd one by one, so re-persisting unions with whatever
    /// is already in the graph instead of replacing it.
    pub async fn upsert_protein_with_correlations(&self, protein: &Protein) -> Result<()> {
        self.upsert_protein(&protein.entry).await?;

        if protein.correlated.is_empty() {
            return Ok(());
        }

        let correlated: Vec<String> = protein.correlated.iter().cloned().collect();
        let q = query(
            r#"
            MATCH (p:Protein {entry: $entry})
            UNWIND $correlated AS other
            MERGE (c:Protein {entry: other})
            MERGE (p)-[:CORRELATES]->(c)
            "#,
        )
        .param("entry", protein.entry.clone())
        .param("correlated", correlated);

        self.graph.run(q).await?;
        Ok(())
    }

    /// Get a protein by entry, with its outbound correlation set
    pub async fn get_protein(&self, entry: &str) -> Result<Option<Protein>> {
        let q = query(
            r#"
            MATCH (p:Protein {entry: $entry})
            OPTIONAL MATCH (p)-[:CORRELATES]->(c:Protein)
            RETURN p.entry AS entry, collect(c.entry) AS correlated
            "#,
        )
        .param("entry", entry);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let entry: String = row.get("entry")?;
            let correlated: Vec<String> = row.get::<Vec<String>>("correlated").unwrap_or_default();
            Ok(Some(Protein {
                entry,
                correlated: correlated.into_iter().collect(),
            }))
        } else {
            Ok(None)
        }
    }

    /// One-hop traversal from a protein entry
    pub async fn get_neighbors(&self, entry: &str) -> Result<HashSet<String>> {
        let q = query(
            r#"
            MATCH (:Protein {entry: $entry})-[:CORRELATES]->(c:Protein)
            RETURN c.entry AS entry
            "#,
        )
        .param("entry", entry);

        let mut result = self.graph.execute(q).await?;
        let mut neighbors = HashSet::new();

        while let Some(row) = result.next().await? {
            let neighbor: String = row.get("entry")?;
            neighbors.insert(neighbor);
        }

        Ok(neighbors)
    }
}
