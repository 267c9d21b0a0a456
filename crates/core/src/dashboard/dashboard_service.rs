use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime};
use log::{debug, warn};
use rust_decimal::Decimal;

use super::dashboard_model::{
    DailyRevenuePoint, DashboardFilters, DashboardMetrics, DashboardSummary, ProductRanking,
};
use super::dashboard_traits::DashboardServiceTrait;
use super::sample_data::sample_sales;
use crate::constants::{DAILY_SERIES_DAYS, TOP_PRODUCTS_LIMIT};
use crate::errors::{Error, Result, ValidationError};
use crate::profiles::{Profile, ProfileRole};
use crate::sales::{total_amount, SaleRecord, SalesQuery, SalesRepositoryTrait};
use crate::utils::time_utils::trailing_days;

/// Number of sales listed in the "recent sales" card.
const RECENT_SALES_LIMIT: usize = 4;

pub struct DashboardService {
    sales_repository: Arc<dyn SalesRepositoryTrait>,
}

impl DashboardService {
    pub fn new(sales_repository: Arc<dyn SalesRepositoryTrait>) -> Self {
        DashboardService { sales_repository }
    }

    fn build_query(viewer: &Profile, filters: &DashboardFilters) -> Result<SalesQuery> {
        let client_id = if viewer.role == ProfileRole::Client {
            let own = viewer.client_id.clone().ok_or_else(|| {
                Error::Validation(ValidationError::MissingField("client_id".to_string()))
            })?;
            Some(own)
        } else {
            filters.client_id.clone().filter(|id| !id.is_empty())
        };

        Ok(SalesQuery {
            start: filters.start_date.map(|d| d.and_time(NaiveTime::MIN)),
            // The last representable day has no successor; its range stays open.
            end: filters
                .end_date
                .and_then(|d| d.succ_opt())
                .map(|next| next.and_time(NaiveTime::MIN) - Duration::nanoseconds(1)),
            client_id,
            ..Default::default()
        })
    }

    fn summarize(sales: &[SaleRecord], today: NaiveDate, is_sample_data: bool) -> DashboardSummary {
        DashboardSummary {
            metrics: calculate_metrics(sales),
            top_products: rank_products(sales),
            daily_revenue: daily_revenue_series(sales, today),
            recent_sales: recent_sales(sales),
            is_sample_data,
        }
    }
}

/// Count, revenue, commission, and average ticket over `sales`.
pub fn calculate_metrics(sales: &[SaleRecord]) -> DashboardMetrics {
    let total_sales = sales.len();
    let total_revenue = total_amount(sales);
    let total_commission = sales
        .iter()
        .map(|s| s.commission.unwrap_or(Decimal::ZERO))
        .sum();
    let average_ticket = if total_sales > 0 {
        total_revenue / Decimal::from(total_sales)
    } else {
        Decimal::ZERO
    };
    DashboardMetrics {
        total_sales,
        total_revenue,
        total_commission,
        average_ticket,
    }
}

/// Products by revenue, highest first, limited to the top entries.
pub fn rank_products(sales: &[SaleRecord]) -> Vec<ProductRanking> {
    let mut by_product: HashMap<&str, (usize, Decimal)> = HashMap::new();
    for sale in sales {
        let entry = by_product
            .entry(sale.product_name.as_str())
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += sale.amount;
    }

    let mut ranking: Vec<ProductRanking> = by_product
        .into_iter()
        .map(|(name, (count, revenue))| ProductRanking {
            name: name.to_string(),
            count,
            revenue,
        })
        .collect();
    ranking.sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.name.cmp(&b.name)));
    ranking.truncate(TOP_PRODUCTS_LIMIT);
    ranking
}

/// Revenue per calendar day over the trailing window ending at `today`, oldest first.
pub fn daily_revenue_series(sales: &[SaleRecord], today: NaiveDate) -> Vec<DailyRevenuePoint> {
    let mut by_date: HashMap<NaiveDate, Decimal> = HashMap::new();
    for sale in sales {
        *by_date.entry(sale.sale_day()).or_insert(Decimal::ZERO) += sale.amount;
    }
    trailing_days(today, DAILY_SERIES_DAYS)
        .into_iter()
        .map(|date| DailyRevenuePoint {
            date,
            value: by_date.get(&date).copied().unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Most recent sales first.
pub fn recent_sales(sales: &[SaleRecord]) -> Vec<SaleRecord> {
    let mut sorted: Vec<SaleRecord> = sales.to_vec();
    sorted.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
    sorted.truncate(RECENT_SALES_LIMIT);
    sorted
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_dashboard(
        &self,
        viewer: &Profile,
        filters: &DashboardFilters,
        today: NaiveDate,
    ) -> Result<DashboardSummary> {
        let query = Self::build_query(viewer, filters)?;

        match self.sales_repository.fetch_sales(&query).await {
            Ok(sales) if !sales.is_empty() => {
                debug!("Dashboard for {}: {} sales", viewer.id, sales.len());
                Ok(Self::summarize(&sales, today, false))
            }
            Ok(_) => {
                debug!("No sales found for {}, showing sample data", viewer.id);
                Ok(Self::summarize(&sample_sales(today), today, true))
            }
            Err(e) => {
                warn!(
                    "Error fetching sales for {} (might be empty or permission), using sample data: {}",
                    viewer.id, e
                );
                Ok(Self::summarize(&sample_sales(today), today, true))
            }
        }
    }
}
