use std::sync::Arc;

use chrono::Datelike;
use salesboard_core::{goals::PacingPeriod, profiles::Profile};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// `year`/`month` query parameters; either one defaults to the current local month.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl PeriodQuery {
    pub fn resolve(&self, state: &AppState) -> ApiResult<PacingPeriod> {
        let today = state.today();
        let period = match (self.year, self.month) {
            (None, None) => PacingPeriod::containing(today)?,
            (year, month) => PacingPeriod::new(
                year.unwrap_or_else(|| today.year()),
                month.unwrap_or_else(|| today.month()),
            )?,
        };
        Ok(period)
    }
}

/// Loads the profile a request is made on behalf of.
pub async fn load_viewer(state: &Arc<AppState>, viewer_id: &str) -> ApiResult<Profile> {
    state
        .profile_repository
        .get_profile(viewer_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Profile {} not found", viewer_id)))
}
