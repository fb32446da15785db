use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use serde_json::json;
use timegrid::config::{Config, DEFAULT_CONFIG_FILE};
use timegrid::svg::render_svg;
use timegrid::{Layout, ScheduleError, ScheduleFile, lay_out};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    #[clap(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
}

struct AppError(ScheduleError);

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({ "code": self.0.code(), "message": self.0.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn layout(
    State(state): State<AppState>,
    Json(file): Json<ScheduleFile>,
) -> Result<Json<Layout>, AppError> {
    Ok(Json(lay_out(file, &state.config)?))
}

async fn render(
    State(state): State<AppState>,
    Json(file): Json<ScheduleFile>,
) -> Result<impl IntoResponse, AppError> {
    let layout = lay_out(file, &state.config)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], render_svg(&layout)))
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/layout", post(layout))
        .route("/render", post(render))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let args = Args::parse();
    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config.display()))?;
    let bind_address = config.bind_address.clone();
    let state = AppState {
        config: Arc::new(config),
    };

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(%bind_address, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
