use std::sync::Arc;

use crate::{
    api::shared::{load_viewer, PeriodQuery},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use salesboard_core::{commission::TierTableRow, goals::GoalProgress};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalProgressQuery {
    viewer_id: String,
    salesperson_id: Option<String>,
    year: Option<i32>,
    month: Option<u32>,
}

async fn compute_progress(
    state: &Arc<AppState>,
    query: &GoalProgressQuery,
) -> ApiResult<GoalProgress> {
    let viewer = load_viewer(state, &query.viewer_id).await?;
    let period = PeriodQuery {
        year: query.year,
        month: query.month,
    }
    .resolve(state)?;
    let progress = state
        .goal_service
        .get_goal_progress(
            &viewer,
            query.salesperson_id.as_deref(),
            period,
            state.today(),
        )
        .await?;
    Ok(progress)
}

async fn get_goal_progress(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GoalProgressQuery>,
) -> ApiResult<Json<GoalProgress>> {
    let progress = compute_progress(&state, &query).await?;
    Ok(Json(progress))
}

async fn get_tier_table(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GoalProgressQuery>,
) -> ApiResult<Json<Vec<TierTableRow>>> {
    let progress = compute_progress(&state, &query).await?;
    Ok(Json(progress.tiers))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals/progress", get(get_goal_progress))
        .route("/goals/tiers", get(get_tier_table))
}
