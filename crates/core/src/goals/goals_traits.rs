use crate::errors::Result;
use crate::goals::goals_model::{GoalProgress, PacingPeriod, SalesGoal};
use crate::profiles::Profile;
use crate::sales::SaleRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait for reading monthly goal rows from the upstream data source
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Goal rows for the month, limited to one salesperson when given.
    async fn fetch_goals(
        &self,
        period: &PacingPeriod,
        salesperson_id: Option<&str>,
    ) -> Result<Vec<SalesGoal>>;
}

/// Trait for goal pacing service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Sum of the matching goal rows; zero when none is configured.
    async fn fetch_target(
        &self,
        period: &PacingPeriod,
        salesperson_id: Option<&str>,
    ) -> Result<Decimal>;

    /// Sales inside the month, attributed to the salesperson when given.
    async fn fetch_sales(
        &self,
        viewer: &Profile,
        period: &PacingPeriod,
        salesperson_id: Option<&str>,
    ) -> Result<Vec<SaleRecord>>;

    /// Full pacing view for the month as seen by `viewer`.
    async fn get_goal_progress(
        &self,
        viewer: &Profile,
        selected_salesperson_id: Option<&str>,
        period: PacingPeriod,
        today: NaiveDate,
    ) -> Result<GoalProgress>;
}
