//! Neo4j client and graph store abstraction for the protein graph

pub mod client;
mod impl_graph_store;
pub mod traits;

pub use client::Neo4jClient;
pub use traits::GraphStore;

#[cfg(test)]
pub(crate) mod mock;
