use crate::app::validation_service::ValidationType;
use crate::domain::section::SectionRegistry;
use crate::storage::ContentStore;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use utoipa::ToSchema;

/// Header carrying the authenticated admin identity, set by the upstream session layer.
pub const ADMIN_HEADER: &str = "x-admin-user";

#[derive(Clone)]
pub struct AppState {
    /// Never mutated after start-up, so no lock.
    pub registry: Arc<SectionRegistry>,
    pub store: Arc<dyn ContentStore>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>, data: Option<JsonValue>) -> Self {
        Self {
            success: false,
            data,
            error: Some(error.into()),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSectionRequest {
    /// Section-type key, e.g. `hero`.
    pub section_type: String,
    pub page: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: Map<String, JsonValue>,
    /// Id of the record being edited; excluded from the quota count.
    #[serde(default)]
    pub exclude_id: Option<String>,
    /// Inactive sections are not held to the per-page quota.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateContentRequest {
    #[schema(value_type = Object)]
    pub data: Map<String, JsonValue>,
    #[serde(default)]
    pub validation_type: ValidationType,
    /// Id of the record being edited; it never clashes with itself.
    #[serde(default)]
    pub content_id: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    pub page: String,
    pub section: String,
    pub section_key: String,
    pub section_type: String,
    #[schema(value_type = Object)]
    pub data: Map<String, JsonValue>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMetadata {
    #[schema(value_type = String, format = DateTime)]
    pub validated_at: DateTime<Utc>,
    pub validated_by: String,
    pub content_id: Option<String>,
}

impl ValidationMetadata {
    pub fn now(validated_by: &str, content_id: Option<&str>) -> Self {
        Self {
            validated_at: Utc::now(),
            validated_by: validated_by.to_string(),
            content_id: content_id.map(str::to_string),
        }
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::failure(
            format!("Invalid JSON body: {} (expected: {})", err, expected),
            None,
        )),
    )
}
