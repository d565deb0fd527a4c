//! HTTP server mode: a JSON array served as a paginated JSON:API collection

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, PaginationSettings};
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{PageNumberMeta, PageNumberPagination, PaginatedResponse};
use crate::query::RequestContext;
use crate::response::ErrorDocument;

/// App state shared across handlers
struct AppState {
    pagination: PaginationSettings,
    default_scheme: String,
    records: Vec<Value>,
}

/// Build the router serving `records`
pub fn router(config: &AppConfig, records: Vec<Value>) -> Router {
    let state = AppState {
        pagination: config.pagination.clone(),
        default_scheme: config.server.default_scheme.clone(),
        records,
    };

    // Build CORS layer - read-only collection, any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/records", get(list_records))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: AppConfig, records: Vec<Value>) -> Result<()> {
    config.validate()?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| Error::config(format!("Invalid listen address: {e}")))?;
    let app = router(&config, records);

    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "records": state.records.len() }))
}

/// Paginated collection endpoint
async fn list_records(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<PaginatedResponse<Value, PageNumberMeta>> {
    let request = RequestContext::from_http(&headers, &uri, &state.default_scheme);
    PageNumberPagination::paginate(&state.pagination, &state.records, Some(&request))?
        .into_response()
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDocument::single(
            StatusCode::NOT_FOUND,
            format!("No route for {}", uri.path()),
        )),
    )
}
