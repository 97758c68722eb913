use crate::domain::validate::PlacementError;
use crate::transport::http::types::{ApiResponse, ADMIN_HEADER};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::json;

pub type HandlerError = (StatusCode, Json<ApiResponse>);

/// Reads the admin identity the session layer attached to the request.
pub fn require_admin(headers: &HeaderMap) -> Result<String, HandlerError> {
    headers
        .get(ADMIN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::failure("Authentication required", None)),
            )
        })
}

pub fn internal_error(context: &str, err: &dyn std::fmt::Display) -> HandlerError {
    tracing::error!(error = %err, "{}", context);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(context, None)),
    )
}

/// Maps a placement rejection to a 400 carrying the values a client needs to recover
/// (allowed pages, counts). Store failures become a bare 500.
pub fn placement_error_response(err: &PlacementError) -> HandlerError {
    let data = match err {
        PlacementError::UnknownSectionType { available, .. } => json!({
            "code": err.code(),
            "availableTypes": available,
        }),
        PlacementError::PageNotAllowed { allowed_pages, .. } => json!({
            "code": err.code(),
            "allowedPages": allowed_pages,
        }),
        PlacementError::QuotaExceeded {
            current_count,
            max_allowed,
            ..
        } => json!({
            "code": err.code(),
            "currentCount": current_count,
            "maxAllowed": max_allowed,
        }),
        PlacementError::Store(e) => return internal_error("Failed to validate section", e),
    };

    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::failure(err.to_string(), Some(data))),
    )
}
