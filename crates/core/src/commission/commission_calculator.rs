use rust_decimal::Decimal;

use super::commission_model::{CommissionEstimate, TierSchedule, TierTableRow};
use crate::constants::HUNDRED;

/// Builds the tier table for a target.
///
/// A tier only counts as achieved when there is a positive target to measure
/// against.
pub fn build_tier_table(
    schedule: &TierSchedule,
    target: Decimal,
    achieved: Decimal,
    current_tier: &str,
) -> Vec<TierTableRow> {
    let target = target.max(Decimal::ZERO);
    schedule
        .tiers
        .iter()
        .map(|tier| {
            let required_revenue = target * tier.threshold_percent / HUNDRED;
            TierTableRow {
                id: tier.id.clone(),
                label: tier.label.clone(),
                threshold_percent: tier.threshold_percent,
                rate: tier.rate,
                required_revenue,
                estimated_commission: required_revenue * tier.rate,
                is_achieved: target > Decimal::ZERO && achieved >= required_revenue,
                is_current: tier.id == current_tier,
            }
        })
        .collect()
}

/// First tier in ascending order not yet achieved.
pub fn next_tier(rows: &[TierTableRow]) -> Option<&TierTableRow> {
    rows.iter().find(|row| !row.is_achieved)
}

/// Variable commission at the current tier plus the optional fixed fee.
pub fn estimate_commission(
    schedule: &TierSchedule,
    achieved: Decimal,
    current_tier: &str,
    fixed_monthly_fee: Option<Decimal>,
) -> CommissionEstimate {
    let rate = schedule.rate_for(current_tier);
    let variable = achieved.max(Decimal::ZERO) * rate;
    let fixed_fee = fixed_monthly_fee.unwrap_or(Decimal::ZERO);
    CommissionEstimate {
        tier_id: current_tier.to_string(),
        rate,
        variable,
        fixed_fee,
        total: variable + fixed_fee,
    }
}
