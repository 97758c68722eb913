use crate::app::validation_service::{ValidationService, ValidationType};
use crate::domain::validate::Placement;
use crate::storage::NewContentRecord;
use crate::transport::http::handlers::common::{
    internal_error, placement_error_response, require_admin,
};
use crate::transport::http::types::{
    json_422, ApiResponse, AppState, CreateContentRequest, ValidateContentRequest,
    ValidationMetadata,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value as JsonValue};

#[utoipa::path(
    post,
    path = "/api/content/validate",
    request_body = ValidateContentRequest,
    responses(
        (status = 200, description = "Validation findings", body = ApiResponse),
        (status = 401, description = "Missing admin identity", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn validate_content_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Result<Json<ValidateContentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let admin = match require_admin(&headers) {
        Ok(a) => a,
        Err(resp) => return resp.into_response(),
    };

    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, r#"{"data": {...}, "validationType": "full"}"#).into_response()
        }
    };

    let service = ValidationService::new(&state.registry, state.store.as_ref());
    let content_id = request.content_id.as_deref();

    match service
        .validate(&request.data, request.validation_type, content_id)
        .await
    {
        Ok(report) => {
            let metadata = ValidationMetadata::now(&admin, content_id);
            (
                StatusCode::OK,
                Json(ApiResponse::ok(json!({
                    "isValid": report.is_valid(),
                    "errors": report.errors,
                    "warnings": report.warnings,
                    "suggestions": report.suggestions,
                    "validationType": request.validation_type.as_str(),
                    "validatedData": request.data,
                    "metadata": metadata,
                }))),
            )
                .into_response()
        }
        Err(e) => internal_error("Failed to validate content", &e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/content",
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Content section created", body = ApiResponse),
        (status = 400, description = "Validation failed; nothing was saved", body = ApiResponse),
        (status = 401, description = "Missing admin identity", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_content_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Result<Json<CreateContentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let admin = match require_admin(&headers) {
        Ok(a) => a,
        Err(resp) => return resp.into_response(),
    };

    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                r#"{"page": "...", "section": "...", "sectionKey": "...", "sectionType": "...", "data": {...}}"#,
            )
            .into_response()
        }
    };

    let page = request.page.trim();
    let section_type = request.section_type.trim();
    let service = ValidationService::new(&state.registry, state.store.as_ref());

    let placement = match service
        .validate_placement(Placement {
            section_type,
            page,
            data: &request.data,
            exclude_id: None,
            is_active: request.is_active,
        })
        .await
    {
        Ok(p) => p,
        Err(e) => return placement_error_response(&e).into_response(),
    };
    if !placement.validation.is_valid {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(
                "Validation failed",
                Some(json!({ "isValid": false, "errors": placement.validation.errors })),
            )),
        )
            .into_response();
    }

    // Record-level checks (key format, duplicates, quality) over the coerced data plus its
    // identifying fields.
    let mut record = placement.validation.data.clone();
    record.insert("page".to_string(), JsonValue::from(page));
    record.insert("section".to_string(), JsonValue::from(request.section.as_str()));
    record.insert(
        "sectionKey".to_string(),
        JsonValue::from(request.section_key.as_str()),
    );
    let report = match service.validate(&record, ValidationType::Full, None).await {
        Ok(r) => r,
        Err(e) => return internal_error("Failed to validate content", &e).into_response(),
    };
    if !report.is_valid() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(
                "Validation failed",
                Some(json!({
                    "isValid": false,
                    "errors": report.errors,
                    "warnings": report.warnings,
                    "suggestions": report.suggestions,
                })),
            )),
        )
            .into_response();
    }

    let new_record = NewContentRecord {
        page: page.to_string(),
        section: request.section.clone(),
        section_key: request.section_key.clone(),
        section_type: Some(placement.section_type.clone()),
        content: JsonValue::Object(placement.validation.data),
        is_active: request.is_active,
    };

    // An inactive record leaves the slot count unchanged.
    let remaining_slots = if request.is_active {
        placement.remaining_slots.saturating_sub(1)
    } else {
        placement.remaining_slots
    };

    match state.store.insert(new_record).await {
        Ok(stored) => {
            tracing::info!(
                id = %stored.id,
                page = %stored.page,
                section_key = %stored.section_key,
                created_by = %admin,
                "content section created"
            );
            (
                StatusCode::CREATED,
                Json(ApiResponse::ok(json!({
                    "record": stored,
                    "warnings": report.warnings,
                    "suggestions": report.suggestions,
                    "remainingSlots": remaining_slots,
                }))),
            )
                .into_response()
        }
        Err(e) => internal_error("Failed to save content", &e).into_response(),
    }
}
