//! Protein submission and correlation query handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::handlers::{AppError, CorrelatorState};
use crate::correlator::{CorrelationSubmission, CorrelatorError};

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Deserialize)]
pub struct CorrelationsQuery {
    pub entry: String,
}

/// One element of the correlation query response, the shape the frontend
/// consumes: `[{"entry": "..."}]`
#[derive(Serialize)]
pub struct CorrelatedProtein {
    pub entry: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Ingest a batch of correlation submissions.
///
/// Each submission is an independent unit: one that fails to decode or
/// validate is logged and skipped without affecting the rest. A store
/// failure aborts with 500 — the whole batch is safe to retry because every
/// write is idempotent.
pub async fn submit_proteins(
    State(state): State<CorrelatorState>,
    Json(submissions): Json<Vec<serde_json::Value>>,
) -> Result<StatusCode, AppError> {
    tracing::info!("received {} correlation submissions", submissions.len());

    for (i, raw) in submissions.into_iter().enumerate() {
        let submission: CorrelationSubmission = match serde_json::from_value(raw) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("submission #{} rejected: {}", i, e);
                continue;
            }
        };

        match state.correlator.correlate(&submission).await {
            Ok(()) => {}
            Err(CorrelatorError::Validation(msg)) => {
                tracing::warn!("submission #{} ('{}') rejected: {}", i, submission.entry, msg);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(StatusCode::OK)
}

/// Get the correlated-entry set for a protein
pub async fn get_correlations(
    State(state): State<CorrelatorState>,
    Query(params): Query<CorrelationsQuery>,
) -> Result<Json<Vec<CorrelatedProtein>>, AppError> {
    let entries = state.query.correlations_for(&params.entry).await?;

    let mut correlated: Vec<CorrelatedProtein> = entries
        .into_iter()
        .map(|entry| CorrelatedProtein { entry })
        .collect();
    correlated.sort_by(|a, b| a.entry.cmp(&b.entry));

    Ok(Json(correlated))
}
