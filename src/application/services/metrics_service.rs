//! Click counting and metrics listing service.

use std::sync::Arc;

use crate::domain::entities::LinkMetric;
use crate::domain::repositories::MetricsRepository;
use crate::error::AppError;

/// Inclusive score interval served by the metrics endpoint.
///
/// The store filters on the click-count value itself, not on rank, so a
/// link climbs out of the listing once it passes `SCORE_RANGE_MAX` clicks.
/// The interval is part of the wire contract and changing it changes what
/// clients see.
const SCORE_RANGE_MIN: i64 = 0;
const SCORE_RANGE_MAX: i64 = 50;

/// Service for recording clicks and listing per-link totals.
pub struct MetricsService {
    repository: Arc<dyn MetricsRepository>,
}

impl MetricsService {
    /// Creates a new metrics service.
    pub fn new(repository: Arc<dyn MetricsRepository>) -> Self {
        Self { repository }
    }

    /// Records one click for a link and returns the new total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the score store is unreachable.
    pub async fn record_click(&self, link_id: i64) -> Result<i64, AppError> {
        self.repository.increment_clicks(link_id).await
    }

    /// Returns the served metrics window, most-clicked first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the score store is unreachable.
    pub async fn top_metrics(&self) -> Result<Vec<LinkMetric>, AppError> {
        let mut metrics = self
            .repository
            .clicks_by_score(SCORE_RANGE_MIN, SCORE_RANGE_MAX)
            .await?;

        metrics.sort_by(|a, b| b.clicks.cmp(&a.clicks));

        Ok(metrics)
    }

    /// Reports whether the score store is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
