use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::context::AppContext;
use crate::races::{load_catalog, CatalogError};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub catalog: CatalogHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogHealth {
    pub status: String,
    pub path: String,
    pub races: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub ctx: AppContext,
    pub start_time: DateTime<Utc>,
}

/// Liveness and readiness endpoints. Hosting platforms also need something
/// listening on the HTTP port, even for the long-polling bot.
pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(ctx: AppContext) -> Self {
        let state = AppState {
            ctx,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    let catalog = match check_catalog(&state.ctx) {
        Ok(races) => CatalogHealth {
            status: "healthy".to_string(),
            path: state.ctx.races_path.display().to_string(),
            races,
        },
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog,
        uptime_seconds: uptime,
    }))
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    match check_catalog(&state.ctx) {
        Ok(_) => Ok(Json("ready")),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}

fn check_catalog(ctx: &AppContext) -> Result<usize, CatalogError> {
    load_catalog(ctx.races_path.as_path()).map(|races| races.len())
}
