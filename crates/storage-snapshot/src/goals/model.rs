//! Row model for the `sales_goals` table.

use rust_decimal::Decimal;
use salesboard_core::goals::SalesGoal;
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;

/// Monthly goal row as exported from the upstream database
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub id: String,
    pub salesperson_id: String,
    pub month: u32,
    pub year: i32,
    pub target_amount: Decimal,
}

impl GoalRow {
    pub fn into_domain(self) -> Result<SalesGoal, StorageError> {
        if !(1..=12).contains(&self.month) {
            return Err(StorageError::InvalidRow {
                table: "sales_goals",
                id: self.id,
                reason: format!("month {} is outside 1-12", self.month),
            });
        }
        Ok(SalesGoal {
            id: self.id,
            salesperson_id: self.salesperson_id,
            month: self.month,
            year: self.year,
            target_amount: self.target_amount,
        })
    }
}
