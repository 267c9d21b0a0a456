//! JSON snapshot storage implementation for Salesboard.
//!
//! This crate reads an export of the upstream sales database (profiles,
//! monthly goals, and sales) from a JSON file and implements the repository
//! traits defined in `salesboard-core` over it:
//! - Loading and validating the snapshot file
//! - Row models mirroring the upstream column names
//! - Repository implementations for profiles, goals, and sales
//!
//! ```text
//!   core (domain)
//!        │
//!        ▼
//!  storage-snapshot (this crate)
//!        │
//!        ▼
//!   salesboard.json
//! ```

pub mod errors;
pub mod snapshot;

// Repository implementations
pub mod goals;
pub mod profiles;
pub mod sales;

pub use errors::StorageError;
pub use goals::GoalRepository;
pub use profiles::ProfileRepository;
pub use sales::SalesRepository;
pub use snapshot::{Snapshot, SnapshotStore};

// Re-export from salesboard-core for convenience
pub use salesboard_core::errors::{DatabaseError, Error, Result};
