//! Commission module - tier schedule, tier table, and commission estimates.

mod commission_calculator;
mod commission_model;


pub use commission_calculator::{build_tier_table, estimate_commission, next_tier};
pub use commission_model::{CommissionEstimate, CommissionTier, TierSchedule, TierTableRow};
