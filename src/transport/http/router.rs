use crate::app::validation_service::ValidationType;
use crate::domain::validate::ValidationReport;
use crate::storage::ContentRecord;
use crate::transport::http::handlers::{content, health, sections};
use crate::transport::http::types::{
    ApiResponse, CreateContentRequest, ValidateContentRequest, ValidateSectionRequest,
    ValidationMetadata,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        sections::list_section_types_handler,
        sections::get_section_type_handler,
        sections::validate_section_handler,
        content::validate_content_handler,
        content::create_content_handler
    ),
    components(schemas(
        ApiResponse,
        ValidateSectionRequest,
        ValidateContentRequest,
        CreateContentRequest,
        ValidationType,
        ValidationMetadata,
        ValidationReport,
        ContentRecord
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/sections/types", get(sections::list_section_types_handler))
        .route(
            "/api/sections/types/:section_type",
            get(sections::get_section_type_handler),
        )
        .route("/api/sections/validate", post(sections::validate_section_handler))
        .route("/api/content/validate", post(content::validate_content_handler))
        .route("/api/content", post(content::create_content_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
