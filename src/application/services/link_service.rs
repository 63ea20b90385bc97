//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{LinkTarget, NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service for creating and retrieving short links.
///
/// Codes are chosen by the caller, never generated here, so creation is a
/// single insert and the store's unique constraint is the only arbiter of
/// code ownership.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link and returns the store-generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(&self, new_link: NewShortLink) -> Result<i64, AppError> {
        self.repository.insert(new_link).await
    }

    /// Lists every stored link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list_all().await
    }

    /// Resolves a code to its redirect target.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_code(&self, code: &str) -> Result<LinkTarget, AppError> {
        self.repository
            .find_target_by_code(code)
            .await?
            .ok_or(AppError::LinkNotFound)
    }

    /// Reports whether the link store is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
