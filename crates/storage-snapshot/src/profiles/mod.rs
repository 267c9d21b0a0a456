//! Snapshot storage implementation for profiles.

mod model;
mod repository;

pub use model::ProfileRow;
pub use repository::ProfileRepository;
