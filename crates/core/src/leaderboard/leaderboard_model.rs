//! Leaderboard domain models.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::goals::PacingPeriod;

/// One salesperson's standing for the month.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub salesperson_id: String,
    pub name: String,
    pub target: Decimal,
    pub achieved: Decimal,
    pub percentage: Decimal,
    /// Amount still missing to reach the target, never negative.
    pub gap: Decimal,
    pub projected: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardTotals {
    pub target: Decimal,
    pub achieved: Decimal,
    pub gap: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub period: PacingPeriod,
    pub entries: Vec<LeaderboardEntry>,
    pub totals: LeaderboardTotals,
}
