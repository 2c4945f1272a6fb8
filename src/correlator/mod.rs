//! Correlation engine for the protein similarity graph

pub mod engine;
pub mod error;
pub mod protein;
pub mod query;

pub use engine::{CorrelationSubmission, Correlator, JaccardPair};
pub use error::CorrelatorError;
pub use protein::{Protein, CORRELATION_THRESHOLD};
pub use query::CorrelationQuery;
