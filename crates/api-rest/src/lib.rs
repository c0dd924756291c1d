//! # API REST
//!
//! HTTP surface of the APK download server.
//!
//! Handles:
//! - The single `GET /download-apk` endpoint, built with axum
//! - Startup configuration (bind address and artifact path)
//! - The shutdown signal used for graceful termination
//!
//! Uses `apk-artifact` for opening the file on disk.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod shutdown;

pub use config::{ConfigError, ServerConfig};
pub use shutdown::shutdown_signal;

use apk_artifact::ArtifactFile;
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use tower_http::trace::TraceLayer;

/// Path of the download endpoint.
pub const DOWNLOAD_ROUTE: &str = "/download-apk";

/// Application state shared across handlers
///
/// Holds the artifact resolved at startup. It is never mutated after the router is built.
#[derive(Clone)]
struct AppState {
    artifact: Arc<ArtifactFile>,
}

/// Builds the application router.
///
/// Only [`DOWNLOAD_ROUTE`] is mapped; every other path falls through to axum's default 404.
pub fn router(artifact: ArtifactFile) -> Router {
    Router::new()
        .route(DOWNLOAD_ROUTE, get(download_apk))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState {
            artifact: Arc::new(artifact),
        })
}

/// Streams the artifact to the client as an attachment
///
/// The file is opened and checked before any part of the response is built, so a missing
/// artifact never produces a partial body.
///
/// # Returns
/// * `Ok(Response)` - `200 OK` with the file bytes and `Content-Disposition: attachment`
///
/// # Errors
/// Returns:
/// - `404 Not Found` if the artifact is missing or is not a regular file
/// - `500 Internal Server Error` if the artifact cannot be opened or the response built
async fn download_apk(
    State(state): State<AppState>,
) -> Result<Response, (StatusCode, &'static str)> {
    let artifact = &state.artifact;

    let opened = match artifact.open().await {
        Ok(opened) => opened,
        Err(e) if e.is_not_found() => {
            tracing::error!("Download artifact error: {e}");
            return Err((StatusCode::NOT_FOUND, "Not found"));
        }
        Err(e) => {
            tracing::error!("Download artifact error: {e:?}");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"));
        }
    };

    let len = opened.len();
    let modified = opened.modified();

    let mut builder = axum::http::Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, artifact.content_type())
        .header(header::CONTENT_LENGTH, len)
        .header(header::CONTENT_DISPOSITION, artifact.content_disposition());

    if let Some(modified) = modified {
        builder = builder.header(header::LAST_MODIFIED, httpdate::fmt_http_date(modified));
    }

    let body = Body::from_stream(ReaderStream::new(opened.into_file()));

    builder.body(body).map_err(|e| {
        tracing::error!("Build download response error: {e:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
    })
}
