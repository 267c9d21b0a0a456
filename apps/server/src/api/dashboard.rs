use std::sync::Arc;

use crate::{api::shared::load_viewer, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use salesboard_core::dashboard::{DashboardFilters, DashboardSummary};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardQuery {
    viewer_id: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    client_id: Option<String>,
}

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<DashboardSummary>> {
    let viewer = load_viewer(&state, &query.viewer_id).await?;
    let filters = DashboardFilters {
        start_date: query.start_date,
        end_date: query.end_date,
        client_id: query.client_id,
    };
    let summary = state
        .dashboard_service
        .get_dashboard(&viewer, &filters, state.today())
        .await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
