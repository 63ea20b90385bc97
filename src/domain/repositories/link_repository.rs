//! Repository trait for short link data access.

use crate::domain::entities::{LinkTarget, NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the relational link store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link and returns the store-generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the code is already taken.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<i64, AppError>;

    /// Finds the redirect target for a code.
    ///
    /// Fetches only the id and destination URL, not the full row.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkTarget))` if found
    /// - `Ok(None)` if no link has this code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_target_by_code(&self, code: &str) -> Result<Option<LinkTarget>, AppError>;

    /// Lists every stored link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError>;

    /// Checks that the store answers a trivial query.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
