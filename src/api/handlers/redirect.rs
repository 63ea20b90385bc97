//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::redirect::RedirectParams;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Validate the code (minimum length 3) before touching any store
/// 2. Resolve the code to its target URL
/// 3. Record the click and wait for the write to complete
/// 4. Respond 301 Moved Permanently with the target in `Location`
///
/// The click is counted before the response goes out, so every served
/// redirect has landed in the metrics store.
///
/// # Errors
///
/// Returns 400 with `{"errors": [...]}` if the code fails validation.
/// Returns 400 with `{"message": "Link not found"}` for an unknown code.
/// Returns 500 if either store is unreachable.
pub async fn redirect_handler(
    Path(params): Path<RedirectParams>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let target = state.link_service.resolve_code(&params.code).await?;

    state.metrics_service.record_click(target.id).await?;

    // Redirect::permanent would send 308; the contract is plain 301.
    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, target.original_url)],
    ))
}
