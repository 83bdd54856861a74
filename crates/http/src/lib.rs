//! HTTP surface for homesense.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod page;
mod query_types;
mod response_types;

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use homesense_core::Config;
use homesense_service::{
    IngestService, LatestReadingsService, PasswordVerifier, ServiceError,
};
use homesense_storage::StorageBackend;

pub use page::{render_page, HTML_CONTENT_TYPE};
pub use response_types::{IngestResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Built once at startup and wrapped in `Arc`.
pub struct AppState {
    /// Read path: auth, fan-out, formatting
    pub readings_service: LatestReadingsService,
    /// Write path for device readings
    pub ingest_service: IngestService,
    /// Checks the ingest password header
    pub verifier: PasswordVerifier,
}

impl AppState {
    pub fn new(storage: Arc<StorageBackend>, config: &Config) -> Result<Self, ServiceError> {
        let readings_service = LatestReadingsService::from_config(Arc::clone(&storage), config)?;
        let verifier = PasswordVerifier::from_hex(&config.password_hash)?;
        Ok(Self { readings_service, ingest_service: IngestService::new(storage), verifier })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::latest::latest_page))
        .route(
            "/latest",
            get(handlers::latest::latest_page).post(handlers::latest::latest_page_json),
        )
        .route("/api/measurements", post(handlers::measurements::ingest_measurement))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION").to_owned() })
}
