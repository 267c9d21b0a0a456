//! Sales module - sale records, query filters, and the repository trait.

mod sales_constants;
mod sales_model;
mod sales_traits;

#[cfg(test)]
mod sales_model_tests;

pub use sales_constants::*;
pub use sales_model::{total_amount, SaleRecord, SalesQuery, SalespersonFilter};
pub use sales_traits::SalesRepositoryTrait;
