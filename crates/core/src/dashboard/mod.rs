//! Dashboard module - revenue KPIs, product ranking, and daily revenue series.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;
mod sample_data;


pub use dashboard_model::{
    DailyRevenuePoint, DashboardFilters, DashboardMetrics, DashboardSummary, ProductRanking,
};
pub use dashboard_service::{
    calculate_metrics, daily_revenue_series, rank_products, recent_sales, DashboardService,
};
pub use dashboard_traits::DashboardServiceTrait;
pub use sample_data::sample_sales;
