//! Short link entity mapping a code to its original URL.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// Rows are immutable once created; there is no update or delete operation
/// anywhere in the service.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new short link.
///
/// `id` and `created_at` are generated by the store on insert.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub original_url: String,
}

/// Two-column projection used by the redirect path.
///
/// The redirect handler only needs the row id (to count the click) and the
/// destination, so the full entity is never fetched there.
#[derive(Debug, Clone)]
pub struct LinkTarget {
    pub id: i64,
    pub original_url: String,
}
