use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

pub mod dashboard;
pub mod goals;
pub mod leaderboard;
pub mod shared;

pub async fn healthz() -> &'static str {
    "ok"
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(goals::router())
        .merge(dashboard::router())
        .merge(leaderboard::router());

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
