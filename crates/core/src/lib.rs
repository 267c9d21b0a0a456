//! Salesboard Core - Domain entities, services, and traits.
//!
//! This crate contains the goal pacing engine, commission tiers, and the
//! dashboard and leaderboard aggregations. It is storage-agnostic and defines
//! traits that are implemented by the `storage-snapshot` crate.

pub mod commission;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod leaderboard;
pub mod profiles;
pub mod sales;
pub mod settings;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
