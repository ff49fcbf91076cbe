//! AI Job Risk 2030 web front-end for JobRisk
//!
//! Run with: cargo run -p jobrisk-web (reads ./jobrisk.toml when present)
//! Then open: http://localhost:8080

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use jobrisk::{console, AppConfig, AppContext, StartupError};
use jobrisk_web::api;
use owo_colors::OwoColorize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

const CONFIG_FILE: &str = "jobrisk.toml";

#[tokio::main]
async fn main() -> ExitCode {
    console::init();

    let config = match load_config(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => return blocked(&err),
    };

    let ctx = match AppContext::load(config) {
        Ok(ctx) => ctx,
        Err(err) => return blocked(&err),
    };

    match serve(Arc::new(ctx)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "✖".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

/// Defaults apply only when the file is absent; a broken file is fatal.
fn load_config(path: &Path) -> Result<AppConfig, StartupError> {
    if path.exists() {
        Ok(AppConfig::load(path)?)
    } else {
        Ok(AppConfig::default())
    }
}

fn blocked(err: &StartupError) -> ExitCode {
    eprintln!("{} {}", "✖".bright_red().bold(), err.to_string().red());
    if matches!(err, StartupError::MissingArtifacts(_)) {
        eprintln!(
            "  {} train the model and export its artifacts before starting the app",
            "▸".bright_yellow()
        );
    }
    ExitCode::FAILURE
}

async fn serve(state: api::AppState) -> std::io::Result<()> {
    let server = state.config().server.clone();

    // CORS for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(state.clone())
        .fallback_service(ServeDir::new(&server.static_dir))
        .layer(cors);

    let addr = server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        event = "server_start",
        addr = %addr,
        dashboard = state.dashboard().is_available(),
    );

    axum::serve(listener, app).await
}
