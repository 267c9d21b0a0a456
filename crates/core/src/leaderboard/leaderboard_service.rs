use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::leaderboard_model::{Leaderboard, LeaderboardEntry, LeaderboardTotals};
use super::leaderboard_traits::LeaderboardServiceTrait;
use crate::errors::Result;
use crate::goals::pacing::{linear_projection, percentage_of};
use crate::goals::{GoalRepositoryTrait, PacingPeriod, SalesGoal};
use crate::profiles::{Profile, ProfileRepositoryTrait, ProfileRole};
use crate::sales::{total_amount, SaleRecord, SalesQuery, SalesRepositoryTrait};

/// Roles that appear on the leaderboard.
const RANKED_ROLES: [ProfileRole; 2] = [ProfileRole::Sales, ProfileRole::Admin];

pub struct LeaderboardService {
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    sales_repository: Arc<dyn SalesRepositoryTrait>,
}

impl LeaderboardService {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        sales_repository: Arc<dyn SalesRepositoryTrait>,
    ) -> Self {
        LeaderboardService {
            profile_repository,
            goal_repository,
            sales_repository,
        }
    }
}

/// Ranks `profiles` for the month.
///
/// `sales` must already be limited to the month and exclude cancelled sales.
/// Profiles with neither a target nor sales are left out. Entries are ordered
/// by percentage, highest first, then by name.
pub fn rank_salespeople(
    profiles: &[Profile],
    goals: &[SalesGoal],
    sales: &[SaleRecord],
    period: &PacingPeriod,
    today: NaiveDate,
) -> (Vec<LeaderboardEntry>, LeaderboardTotals) {
    let mut targets: HashMap<&str, Decimal> = HashMap::new();
    for goal in goals {
        *targets
            .entry(goal.salesperson_id.as_str())
            .or_insert(Decimal::ZERO) += goal.target_amount;
    }

    let mut entries: Vec<LeaderboardEntry> = profiles
        .iter()
        .map(|profile| {
            let target = targets
                .get(profile.id.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO)
                .max(Decimal::ZERO);
            let achieved = total_amount(sales.iter().filter(|s| s.is_attributed_to(profile)));
            LeaderboardEntry {
                salesperson_id: profile.id.clone(),
                name: profile.display_name(),
                target,
                achieved,
                percentage: percentage_of(achieved, target),
                gap: (target - achieved).max(Decimal::ZERO),
                projected: linear_projection(achieved, period, today),
            }
        })
        .filter(|e| e.target > Decimal::ZERO || e.achieved > Decimal::ZERO)
        .collect();

    entries.sort_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| a.name.cmp(&b.name))
    });

    let target: Decimal = entries.iter().map(|e| e.target).sum();
    let achieved = total_amount(sales);
    let totals = LeaderboardTotals {
        target,
        achieved,
        gap: (target - achieved).max(Decimal::ZERO),
        percentage: percentage_of(achieved, target),
    };
    (entries, totals)
}

#[async_trait]
impl LeaderboardServiceTrait for LeaderboardService {
    async fn get_leaderboard(
        &self,
        period: PacingPeriod,
        today: NaiveDate,
    ) -> Result<Leaderboard> {
        let query =
            SalesQuery::between(period.start_instant(), period.end_instant()).excluding_cancelled();

        let (profiles, goals, sales) = futures::try_join!(
            self.profile_repository.list_by_roles(&RANKED_ROLES),
            self.goal_repository.fetch_goals(&period, None),
            self.sales_repository.fetch_sales(&query),
        )?;
        debug!(
            "Leaderboard for {}-{:02}: {} profiles, {} goals, {} sales",
            period.year(),
            period.month(),
            profiles.len(),
            goals.len(),
            sales.len()
        );

        let (entries, totals) = rank_salespeople(&profiles, &goals, &sales, &period, today);
        Ok(Leaderboard {
            period,
            entries,
            totals,
        })
    }
}
