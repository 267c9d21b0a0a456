//! Dashboard domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sales::SaleRecord;

/// Filters chosen on the dashboard header. Dates are inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_sales: usize,
    pub total_revenue: Decimal,
    pub total_commission: Decimal,
    pub average_ticket: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRanking {
    pub name: String,
    pub count: usize,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenuePoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub metrics: DashboardMetrics,
    pub top_products: Vec<ProductRanking>,
    pub daily_revenue: Vec<DailyRevenuePoint>,
    pub recent_sales: Vec<SaleRecord>,
    /// True when the figures come from the built-in sample dataset because
    /// the data source failed or returned nothing.
    pub is_sample_data: bool,
}
