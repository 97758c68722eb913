// src/bin/api_server.rs

use std::sync::Arc;
use tls_content_validator::infra::{config, logging};
use tls_content_validator::{storage, transport, SectionRegistry};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env();
    logging::init();

    // --- Section Registry Initialization ---
    // A malformed table is a programming error: refuse to start rather than validate against it.
    let registry = Arc::new(SectionRegistry::builtin()?);
    tracing::info!(
        section_types = registry.len(),
        "section registry loaded: {}",
        registry.list_types().join(", ")
    );

    // --- Store Initialization ---
    let store = storage::open_from_env().await?;

    let app_state = transport::http::AppState { registry, store };

    // --- API Server Initialization ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("API server listening on http://{}", bind_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
