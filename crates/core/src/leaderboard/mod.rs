//! Leaderboard module - monthly ranking of salespeople against their goals.

mod leaderboard_model;
mod leaderboard_service;
mod leaderboard_traits;

#[cfg(test)]
mod leaderboard_service_tests;

pub use leaderboard_model::{Leaderboard, LeaderboardEntry, LeaderboardTotals};
pub use leaderboard_service::{rank_salespeople, LeaderboardService};
pub use leaderboard_traits::LeaderboardServiceTrait;
