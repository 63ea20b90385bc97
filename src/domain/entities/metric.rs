//! Click metric entity backed by the score store.

/// Cumulative click total for one link.
///
/// Stored in a Redis sorted set: the member is the stringified link id and
/// the score is the click count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMetric {
    pub link_id: i64,
    pub clicks: i64,
}
