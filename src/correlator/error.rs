//! Error taxonomy for the correlation engine and query service

use thiserror::Error;

/// Errors surfaced by [`Correlator`](super::Correlator) and
/// [`CorrelationQuery`](super::CorrelationQuery).
///
/// `Validation` is user-correctable and never retried. `Store` failures
/// propagate untouched; the whole submission is safe to retry because node
/// upsert and edge admission are both idempotent.
#[derive(Debug, Error)]
pub enum CorrelatorError {
    #[error("invalid submission: {0}")]
    Validation(String),

    #[error("no protein found with entry '{0}'")]
    NotFound(String),

    #[error("graph store failure: {0}")]
    Store(#[from] anyhow::Error),
}
