use crate::app::validation_service::ValidationService;
use crate::domain::validate::Placement;
use crate::transport::http::handlers::common::{placement_error_response, require_admin};
use crate::transport::http::types::{
    json_422, ApiResponse, AppState, ValidateSectionRequest, ValidationMetadata,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/sections/types",
    responses(
        (status = 200, description = "All section-type definitions", body = ApiResponse)
    )
)]
pub async fn list_section_types_handler(State(state): State<AppState>) -> impl IntoResponse {
    let definitions = state.registry.definitions();
    (
        StatusCode::OK,
        Json(ApiResponse::ok(json!({
            "count": definitions.len(),
            "types": definitions,
        }))),
    )
}

#[utoipa::path(
    get,
    path = "/api/sections/types/{section_type}",
    params(
        ("section_type" = String, Path, description = "Section-type key (e.g. hero)")
    ),
    responses(
        (status = 200, description = "Section-type definition", body = ApiResponse),
        (status = 404, description = "Unknown section type", body = ApiResponse)
    )
)]
pub async fn get_section_type_handler(
    State(state): State<AppState>,
    Path(section_type): Path<String>,
) -> impl IntoResponse {
    match state.registry.get(section_type.trim()) {
        Some(definition) => (StatusCode::OK, Json(ApiResponse::ok(json!(definition)))),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::failure(
                format!("Unknown section type '{}'", section_type),
                Some(json!({ "availableTypes": state.registry.list_types() })),
            )),
        ),
    }
}

#[utoipa::path(
    post,
    path = "/api/sections/validate",
    request_body = ValidateSectionRequest,
    responses(
        (status = 200, description = "Placement allowed; field findings in data", body = ApiResponse),
        (status = 400, description = "Unknown type, page not allowed or quota exceeded", body = ApiResponse),
        (status = 401, description = "Missing admin identity", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn validate_section_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Result<Json<ValidateSectionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let admin = match require_admin(&headers) {
        Ok(a) => a,
        Err(resp) => return resp.into_response(),
    };

    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, r#"{"sectionType": "...", "page": "...", "data": {...}}"#)
                .into_response()
        }
    };

    let service = ValidationService::new(&state.registry, state.store.as_ref());
    let placement = Placement {
        section_type: request.section_type.trim(),
        page: request.page.trim(),
        data: &request.data,
        exclude_id: request.exclude_id.as_deref(),
        is_active: request.is_active,
    };

    match service.validate_placement(placement).await {
        Ok(report) => {
            let metadata = ValidationMetadata::now(&admin, request.exclude_id.as_deref());
            (
                StatusCode::OK,
                Json(ApiResponse::ok(json!({
                    "isValid": report.validation.is_valid,
                    "errors": report.validation.errors,
                    "warnings": [],
                    "suggestions": [],
                    "validatedData": report.validation.data,
                    "sectionType": report.section_type,
                    "page": report.page,
                    "currentCount": report.current_count,
                    "maxAllowed": report.max_allowed,
                    "remainingSlots": report.remaining_slots,
                    "metadata": metadata,
                }))),
            )
                .into_response()
        }
        Err(e) => placement_error_response(&e).into_response(),
    }
}
