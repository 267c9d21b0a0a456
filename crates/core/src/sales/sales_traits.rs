use crate::errors::Result;
use crate::sales::sales_model::{SaleRecord, SalesQuery};
use async_trait::async_trait;

/// Trait for reading sales from the upstream data source
#[async_trait]
pub trait SalesRepositoryTrait: Send + Sync {
    /// Returns every sale matching the query, in no particular order.
    async fn fetch_sales(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>>;
}
