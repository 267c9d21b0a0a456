//! Snapshot storage implementation for sales.

mod model;
mod repository;

pub use model::{parse_sale_date, SaleRow};
pub use repository::SalesRepository;
