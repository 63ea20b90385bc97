//! DTOs for the metrics endpoint.

use serde::Serialize;

use crate::domain::entities::LinkMetric;

/// One row of the metrics listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricResponse {
    pub short_link_id: i64,
    pub clicks: i64,
}

impl From<LinkMetric> for MetricResponse {
    fn from(metric: LinkMetric) -> Self {
        Self {
            short_link_id: metric.link_id,
            clicks: metric.clicks,
        }
    }
}
