//! DTO for the redirect endpoint.

use serde::Deserialize;
use validator::Validate;

/// Path parameters for `GET /{code}`.
///
/// Validated before any store access, so a too-short code never reaches
/// the database.
#[derive(Debug, Deserialize, Validate)]
pub struct RedirectParams {
    #[validate(length(min = 3, message = "Code must be at least 3 characters"))]
    pub code: String,
}
