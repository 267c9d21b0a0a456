use async_trait::async_trait;
use chrono::NaiveDate;

use super::dashboard_model::{DashboardFilters, DashboardSummary};
use crate::errors::Result;
use crate::profiles::Profile;

/// Trait for dashboard service operations
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// KPIs, product ranking, and the trailing daily revenue series for `viewer`.
    ///
    /// Client users only ever see their own client's sales.
    async fn get_dashboard(
        &self,
        viewer: &Profile,
        filters: &DashboardFilters,
        today: NaiveDate,
    ) -> Result<DashboardSummary>;
}
