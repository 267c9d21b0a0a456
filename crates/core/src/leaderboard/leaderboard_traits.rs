use crate::errors::Result;
use crate::goals::PacingPeriod;
use crate::leaderboard::leaderboard_model::Leaderboard;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for leaderboard service operations
#[async_trait]
pub trait LeaderboardServiceTrait: Send + Sync {
    /// Ranking of every salesperson and admin with a goal or sales in the month.
    async fn get_leaderboard(&self, period: PacingPeriod, today: NaiveDate)
        -> Result<Leaderboard>;
}
