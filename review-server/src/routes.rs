//! HTTP endpoint handlers: `POST /api/contract-review` and `GET /healthz`.

use std::sync::Arc;
use std::time::SystemTime;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use once_cell::sync::Lazy;
use serde_json::json;

use review_core::report::{AnalysisReport, ReviewRequest};
use review_core::{review_with_options, ReviewOptions};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

static SERVER_START: Lazy<SystemTime> = Lazy::new(SystemTime::now);

/// Liveness probe. Always `200 OK` while the process is up — the core does
/// no I/O, so there is nothing else to check.
pub async fn healthz() -> impl IntoResponse {
    let uptime = SERVER_START.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    Json(json!({
        "status": "ok",
        "service": "review-server",
        "uptimeSeconds": uptime,
    }))
}

/// `POST /api/contract-review`. Deserializes the request, runs the review
/// pipeline, and returns the resulting [`AnalysisReport`].
pub async fn contract_review(
    State(state): State<Arc<AppState>>,
    request: Result<Json<ReviewRequest>, JsonRejection>,
) -> ServerResult<Json<AnalysisReport>> {
    let Json(request) = request?;

    let options = ReviewOptions {
        drift_min_similarity: state.config.drift_min_similarity,
    };

    let report = review_with_options(&request, Utc::now(), options).map_err(ServerError::from)?;
    Ok(Json(report))
}
