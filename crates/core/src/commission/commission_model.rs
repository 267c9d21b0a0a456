//! Commission tier domain models.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One achievement band: reached at `threshold_percent` of the monthly target,
/// paying `rate` (a fraction, `0.008` = 0.8%) on revenue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommissionTier {
    pub id: String,
    pub label: String,
    pub threshold_percent: Decimal,
    pub rate: Decimal,
}

impl CommissionTier {
    pub fn new(id: &str, label: &str, threshold_percent: Decimal, rate: Decimal) -> Self {
        CommissionTier {
            id: id.to_string(),
            label: label.to_string(),
            threshold_percent,
            rate,
        }
    }
}

/// Ordered tier table used to classify achievement and estimate commission.
///
/// `baseline_tier` names the band reported when no threshold is met; without it
/// the lowest configured tier is reported instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierSchedule {
    #[serde(default)]
    pub baseline_tier: Option<String>,
    pub tiers: Vec<CommissionTier>,
}

impl Default for TierSchedule {
    fn default() -> Self {
        TierSchedule {
            baseline_tier: Some("T0".to_string()),
            tiers: vec![
                CommissionTier::new("T1", "T1 (70%)", dec!(70), dec!(0.007)),
                CommissionTier::new("T2", "T2 (100%)", dec!(100), dec!(0.008)),
                CommissionTier::new("T3", "T3 (150%)", dec!(150), dec!(0.011)),
                CommissionTier::new("T4", "T4 (200%)", dec!(200), dec!(0.024)),
            ],
        }
    }
}

impl TierSchedule {
    /// Checks that the table is usable: at least one tier, non-negative and
    /// strictly ascending thresholds, non-negative rates, unique ids.
    pub fn validate(&self) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(Error::InvalidConfigValue(
                "Tier schedule must contain at least one tier".to_string(),
            ));
        }
        for tier in &self.tiers {
            if tier.id.trim().is_empty() {
                return Err(Error::InvalidConfigValue(
                    "Tier id must not be empty".to_string(),
                ));
            }
            if tier.threshold_percent < Decimal::ZERO {
                return Err(Error::InvalidConfigValue(format!(
                    "Tier {} has a negative threshold",
                    tier.id
                )));
            }
            if tier.rate < Decimal::ZERO {
                return Err(Error::InvalidConfigValue(format!(
                    "Tier {} has a negative rate",
                    tier.id
                )));
            }
            if self.baseline_tier.as_deref() == Some(tier.id.as_str()) {
                return Err(Error::InvalidConfigValue(format!(
                    "Tier {} is also the baseline tier",
                    tier.id
                )));
            }
        }
        for pair in self.tiers.windows(2) {
            if pair[1].threshold_percent <= pair[0].threshold_percent {
                return Err(Error::InvalidConfigValue(format!(
                    "Tier thresholds must be strictly ascending ({} then {})",
                    pair[0].id, pair[1].id
                )));
            }
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.tiers.iter().find(|t| !seen.insert(t.id.as_str())) {
            return Err(Error::InvalidConfigValue(format!(
                "Duplicate tier id {}",
                dup.id
            )));
        }
        Ok(())
    }

    /// Highest tier whose threshold is met; the baseline (or lowest tier) otherwise.
    pub fn classify(&self, percentage: Decimal) -> String {
        self.tiers
            .iter()
            .rev()
            .find(|tier| percentage >= tier.threshold_percent)
            .map(|tier| tier.id.clone())
            .or_else(|| self.baseline_tier.clone())
            .or_else(|| self.tiers.first().map(|tier| tier.id.clone()))
            .unwrap_or_default()
    }

    pub fn tier(&self, tier_id: &str) -> Option<&CommissionTier> {
        self.tiers.iter().find(|tier| tier.id == tier_id)
    }

    /// Rate paid at `tier_id`. The baseline tier and unknown ids pay nothing.
    pub fn rate_for(&self, tier_id: &str) -> Decimal {
        self.tier(tier_id)
            .map(|tier| tier.rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Position of a tier id in ascending order; the baseline ranks below every tier.
    pub fn rank_of(&self, tier_id: &str) -> usize {
        self.tiers
            .iter()
            .position(|tier| tier.id == tier_id)
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }
}

/// One row of the tier table shown next to the goal.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierTableRow {
    pub id: String,
    pub label: String,
    pub threshold_percent: Decimal,
    pub rate: Decimal,
    /// Revenue needed to reach this tier: `target * threshold / 100`.
    pub required_revenue: Decimal,
    /// Commission paid if exactly `required_revenue` is sold.
    pub estimated_commission: Decimal,
    pub is_achieved: bool,
    pub is_current: bool,
}

/// Commission owed for the month at the current tier.
///
/// The fixed monthly fee is reported separately and never influences the tier.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommissionEstimate {
    pub tier_id: String,
    pub rate: Decimal,
    pub variable: Decimal,
    pub fixed_fee: Decimal,
    pub total: Decimal,
}
