//! Redis-backed implementation of the metrics repository.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{info, warn};

use crate::domain::entities::LinkMetric;
use crate::domain::repositories::MetricsRepository;
use crate::error::AppError;

/// Name of the sorted set holding per-link click totals.
///
/// Member = stringified link id, score = cumulative click count.
const METRICS_KEY: &str = "metrics";

/// Redis repository for click metrics.
///
/// Uses `ConnectionManager` for connection reuse with automatic reconnects;
/// each operation clones the manager, which is cheap.
pub struct RedisMetricsRepository {
    client: ConnectionManager,
}

impl RedisMetricsRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl MetricsRepository for RedisMetricsRepository {
    async fn increment_clicks(&self, link_id: i64) -> Result<i64, AppError> {
        let mut conn = self.client.clone();

        // ZINCRBY creates the member at delta when absent, so the first
        // click yields a count of 1 without any setup.
        let clicks: f64 = conn.zincr(METRICS_KEY, link_id, 1).await?;

        Ok(clicks as i64)
    }

    async fn clicks_by_score(&self, min: i64, max: i64) -> Result<Vec<LinkMetric>, AppError> {
        let mut conn = self.client.clone();

        let entries: Vec<(String, f64)> = conn
            .zrangebyscore_withscores(METRICS_KEY, min, max)
            .await?;

        let mut metrics = Vec::with_capacity(entries.len());
        for (member, score) in entries {
            match member.parse::<i64>() {
                Ok(link_id) => metrics.push(LinkMetric {
                    link_id,
                    clicks: score as i64,
                }),
                // A member that is not a link id means someone wrote to the
                // set out of band; skip it rather than failing the request.
                Err(_) => warn!("Skipping malformed metrics member: {member}"),
            }
        }

        Ok(metrics)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
