//! Profiles module - dashboard users and their roles.

mod profiles_model;
mod profiles_traits;

pub use profiles_model::{Profile, ProfileRole};
pub use profiles_traits::ProfileRepositoryTrait;
