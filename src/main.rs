use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{ServerConfig, shutdown_signal};

/// Main entry point for the APK download server
///
/// Serves the release APK on `GET /download-apk` until Ctrl-C or SIGTERM, then drains open
/// connections and exits.
///
/// # Environment Variables
/// - `APK_DOWNLOAD_ADDR`: bind address (default: "0.0.0.0:5000")
/// - `APK_DOWNLOAD_ARTIFACT`: artifact path (default: "build/app/outputs/flutter-apk/app-release.apk")
/// - `RUST_LOG`: tracing filter directives
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configured bind address is invalid or cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("apk_download=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env()?;
    let addr = cfg.addr();

    tracing::info!("++ Starting APK download server on {}", addr);
    tracing::info!("++ Serving artifact {}", cfg.artifact().path().display());

    if !cfg.artifact().path().is_file() {
        tracing::warn!(
            "Artifact not present yet, downloads will return 404 until the build produces it"
        );
    }

    let app = api_rest::router(cfg.into_artifact());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- APK download server stopped");

    Ok(())
}
