//! Handler for the click metrics listing.

use axum::{Json, extract::State};

use crate::api::dto::metrics::MetricResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists per-link click totals, most-clicked first.
///
/// # Endpoint
///
/// `GET /api/metrics`
///
/// Serves the window of links whose click count lies in the store's
/// configured score interval; see
/// [`crate::application::services::MetricsService::top_metrics`].
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MetricResponse>>, AppError> {
    let metrics = state.metrics_service.top_metrics().await?;

    Ok(Json(metrics.into_iter().map(MetricResponse::from).collect()))
}
