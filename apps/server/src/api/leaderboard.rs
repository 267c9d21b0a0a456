use std::sync::Arc;

use crate::{api::shared::PeriodQuery, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use salesboard_core::leaderboard::Leaderboard;

async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<Leaderboard>> {
    let period = query.resolve(&state)?;
    let board = state
        .leaderboard_service
        .get_leaderboard(period, state.today())
        .await?;
    Ok(Json(board))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}
