//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, LinkResponse};
use crate::domain::entities::NewShortLink;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link with a caller-chosen code.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "code": "rustlang",
///   "url": "https://www.rust-lang.org"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 with `{"errors": [...]}` if the body is malformed or a
/// constraint is violated (code shorter than 3, URL not absolute).
/// Returns 409 with `{"error": "Duplicated code"}` if the code is taken.
/// Returns 500 on other store failures; the detail is only logged.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = state
        .link_service
        .create_link(NewShortLink {
            code: payload.code,
            original_url: payload.url,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse { short_link_id: id }),
    ))
}

/// Lists every stored link, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// No pagination; the listing is the full table.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}
