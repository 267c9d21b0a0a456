use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::goals_model::{GoalProgress, PacingPeriod};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use super::pacing::{build_calendar, calculate_metrics};
use crate::commission::{build_tier_table, estimate_commission, next_tier};
use crate::errors::Result;
use crate::profiles::{Profile, ProfileRepositoryTrait};
use crate::sales::{SaleRecord, SalesQuery, SalesRepositoryTrait, SalespersonFilter};
use crate::settings::PacingSettings;

pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    sales_repository: Arc<dyn SalesRepositoryTrait>,
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
    settings: Arc<PacingSettings>,
}

impl GoalService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        sales_repository: Arc<dyn SalesRepositoryTrait>,
        profile_repository: Arc<dyn ProfileRepositoryTrait>,
        settings: Arc<PacingSettings>,
    ) -> Self {
        GoalService {
            goal_repository,
            sales_repository,
            profile_repository,
            settings,
        }
    }

    /// Attribution filter for a salesperson. The viewer's own profile is used
    /// directly; anyone else is looked up so their UTM code can be matched too.
    async fn salesperson_filter(
        &self,
        viewer: &Profile,
        salesperson_id: &str,
    ) -> SalespersonFilter {
        if viewer.id == salesperson_id {
            return SalespersonFilter::from(viewer);
        }
        match self.profile_repository.get_profile(salesperson_id).await {
            Ok(Some(profile)) => SalespersonFilter::from(&profile),
            Ok(None) => SalespersonFilter {
                salesperson_id: salesperson_id.to_string(),
                utm_code: None,
            },
            Err(e) => {
                warn!(
                    "Could not load profile {} for UTM attribution, matching by id only: {}",
                    salesperson_id, e
                );
                SalespersonFilter {
                    salesperson_id: salesperson_id.to_string(),
                    utm_code: None,
                }
            }
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn fetch_target(
        &self,
        period: &PacingPeriod,
        salesperson_id: Option<&str>,
    ) -> Result<Decimal> {
        let goals = self
            .goal_repository
            .fetch_goals(period, salesperson_id)
            .await?;
        Ok(goals.iter().map(|g| g.target_amount).sum())
    }

    async fn fetch_sales(
        &self,
        viewer: &Profile,
        period: &PacingPeriod,
        salesperson_id: Option<&str>,
    ) -> Result<Vec<SaleRecord>> {
        let filter = match salesperson_id {
            Some(id) => Some(self.salesperson_filter(viewer, id).await),
            None => None,
        };
        let query = SalesQuery::between(period.start_instant(), period.end_instant())
            .with_salesperson(filter);
        self.sales_repository.fetch_sales(&query).await
    }

    async fn get_goal_progress(
        &self,
        viewer: &Profile,
        selected_salesperson_id: Option<&str>,
        period: PacingPeriod,
        today: NaiveDate,
    ) -> Result<GoalProgress> {
        let scope = viewer.goal_scope(selected_salesperson_id);
        let scope_ref = scope.as_deref();

        let target = match self.fetch_target(&period, scope_ref).await {
            Ok(target) => target,
            Err(e) => {
                warn!(
                    "Failed to fetch target for {}-{:02}, using zero: {}",
                    period.year(),
                    period.month(),
                    e
                );
                Decimal::ZERO
            }
        };
        let sales = match self.fetch_sales(viewer, &period, scope_ref).await {
            Ok(sales) => sales,
            Err(e) => {
                warn!(
                    "Failed to fetch sales for {}-{:02}, using an empty list: {}",
                    period.year(),
                    period.month(),
                    e
                );
                Vec::new()
            }
        };
        debug!(
            "Goal progress for {:?}: target {}, {} sales",
            scope_ref,
            target,
            sales.len()
        );

        let schedule = &self.settings.tier_schedule;
        let metrics = calculate_metrics(target, &sales, &period, today, schedule);
        let calendar = build_calendar(target, &sales, &period, today);
        let tiers = build_tier_table(
            schedule,
            metrics.target,
            metrics.achieved,
            &metrics.current_tier,
        );
        let next = next_tier(&tiers).cloned();
        let commission = estimate_commission(
            schedule,
            metrics.achieved,
            &metrics.current_tier,
            self.settings.fixed_monthly_fee,
        );

        Ok(GoalProgress {
            period,
            salesperson_id: scope,
            metrics,
            calendar: calendar.days,
            tiers,
            next_tier: next,
            commission,
        })
    }
}
