//! Snapshot storage implementation for monthly goals.

mod model;
mod repository;

pub use model::GoalRow;
pub use repository::GoalRepository;
