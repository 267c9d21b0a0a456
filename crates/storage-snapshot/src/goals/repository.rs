use std::sync::Arc;

use async_trait::async_trait;
use salesboard_core::goals::{GoalRepositoryTrait, PacingPeriod, SalesGoal};
use salesboard_core::Result;

use crate::snapshot::Snapshot;

pub struct GoalRepository {
    snapshot: Arc<Snapshot>,
}

impl GoalRepository {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        GoalRepository { snapshot }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn fetch_goals(
        &self,
        period: &PacingPeriod,
        salesperson_id: Option<&str>,
    ) -> Result<Vec<SalesGoal>> {
        Ok(self
            .snapshot
            .goals
            .iter()
            .filter(|g| g.year == period.year() && g.month == period.month())
            .filter(|g| salesperson_id.map_or(true, |id| g.salesperson_id == id))
            .cloned()
            .collect())
    }
}
