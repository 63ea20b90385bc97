//! Repository trait for per-link click metrics.

use crate::domain::entities::LinkMetric;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the click-count score store.
///
/// # Implementations
///
/// - [`crate::infrastructure::metrics::RedisMetricsRepository`] - Redis sorted set
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// Atomically adds one click to a link's total and returns the new count.
    ///
    /// A link with no recorded clicks starts at zero, so the first increment
    /// returns 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn increment_clicks(&self, link_id: i64) -> Result<i64, AppError>;

    /// Returns every metric whose click count lies in `[min, max]` inclusive.
    ///
    /// The filter applies to the count value itself, not to the entry's rank.
    /// No ordering is guaranteed; callers sort as needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn clicks_by_score(&self, min: i64, max: i64) -> Result<Vec<LinkMetric>, AppError>;

    /// Checks that the store answers a PING.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
