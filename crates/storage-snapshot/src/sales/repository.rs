use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use salesboard_core::sales::{SaleRecord, SalesQuery, SalesRepositoryTrait};
use salesboard_core::Result;

use crate::snapshot::Snapshot;

pub struct SalesRepository {
    snapshot: Arc<Snapshot>,
}

impl SalesRepository {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        SalesRepository { snapshot }
    }
}

#[async_trait]
impl SalesRepositoryTrait for SalesRepository {
    /// Matching sales, newest first.
    async fn fetch_sales(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>> {
        let mut sales: Vec<SaleRecord> = self
            .snapshot
            .sales
            .iter()
            .filter(|sale| query.matches(sale))
            .cloned()
            .collect();
        sales.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
        debug!("Sales query matched {} rows", sales.len());
        Ok(sales)
    }
}
