mod pages;

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use roastmystack_app::config::AppConfig;
use roastmystack_app::domain::{RoastWithStack, StackSelection};
use roastmystack_app::infrastructure::db::{create_connection, run_migrations};
use roastmystack_app::AppContext;
use roastmystack_errors::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use uuid::Uuid;

const RECENT_ROASTS_LIMIT: u64 = 20;

#[derive(Clone)]
struct ApiState {
    ctx: AppContext,
    config: Arc<AppConfig>,
}

#[derive(Deserialize)]
struct SubmitRequest {
    stack: Option<StackSelection>,
}

#[derive(Serialize)]
struct SubmitResponse {
    id: Uuid,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let db = create_connection(&config.database_url)
        .await
        .expect("Failed to connect to database");
    run_migrations(&db).await.expect("Failed to run migrations");

    let ctx = AppContext::new(&config, db);
    let addr = config.bind_addr.clone();
    let state = ApiState {
        ctx,
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/roast-submissions", post(submit_roast))
        .route("/roasts", get(list_roasts))
        .route("/roasts/{id}", get(roast_page))
        .route("/roasts/{id}/preview-image", get(preview_image))
        .layer(CompressionLayer::new())
        .with_state(state);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

async fn submit_roast(
    State(state): State<ApiState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let stack = request
        .stack
        .ok_or_else(|| AppError::Validation("stack data is required".to_string()))?;

    let id = state.ctx.submit_roast.execute(stack).await?;
    Ok(Json(SubmitResponse { id }))
}

/// Recent public roasts, always fetched fresh: `no-store` keeps HTTP caches
/// from hiding rows created moments ago.
async fn list_roasts(
    State(state): State<ApiState>,
) -> Result<impl IntoResponse, AppError> {
    let roasts: Vec<RoastWithStack> = state
        .ctx
        .render_roast
        .list_recent(RECENT_ROASTS_LIMIT)
        .await?;
    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(roasts),
    ))
}

async fn roast_page(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_roast_id(&id)?;
    let roast = state.ctx.render_roast.fetch(id).await?;
    Ok(Html(pages::render_roast_page(
        &roast,
        &state.config.public_base_url,
    )))
}

async fn preview_image(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_roast_id(&id)?;
    let roast = state.ctx.render_roast.fetch(id).await?;
    let svg = state.ctx.render_roast.preview_image(&roast);
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

// Malformed ids were never issued, so they are a 404 rather than a 400.
fn parse_roast_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}
