//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Short code chosen by the caller.
    #[validate(length(min = 3, message = "Code must be at least 3 characters"))]
    pub code: String,

    /// Destination URL (must be a well-formed absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response body for a successfully created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub short_link_id: i64,
}

/// JSON representation of a stored link.
///
/// Field names mirror the store columns, so this one stays snake_case
/// while the create response is camelCase.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            code: link.code,
            original_url: link.original_url,
            created_at: link.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = CreateLinkRequest {
            code: "rust".to_string(),
            url: "https://www.rust-lang.org".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_short_code_rejected() {
        let request = CreateLinkRequest {
            code: "ab".to_string(),
            url: "https://example.com".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().keys().any(|field| *field == "code"));
    }

    #[test]
    fn test_relative_url_rejected() {
        let request = CreateLinkRequest {
            code: "abc".to_string(),
            url: "not-a-url".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().keys().any(|field| *field == "url"));
    }

    #[test]
    fn test_create_response_is_camel_case() {
        let json = serde_json::to_value(CreateLinkResponse { short_link_id: 9 }).unwrap();
        assert_eq!(json["shortLinkId"], 9);
    }

    #[test]
    fn test_link_response_keeps_column_names() {
        let json = serde_json::to_value(LinkResponse::from(ShortLink::new(
            1,
            "abc".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        )))
        .unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["code"], "abc");
        assert_eq!(json["original_url"], "https://example.com");
        assert!(json.get("created_at").is_some());
    }
}
