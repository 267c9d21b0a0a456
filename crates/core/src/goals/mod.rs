//! Goals module - monthly targets, the pacing engine, and the goals service.

mod goals_model;
mod goals_service;
mod goals_traits;
pub mod pacing;

#[cfg(test)]
mod goals_service_tests;


pub use goals_model::{
    DayStatus, GoalProgress, GoalsMetrics, PacingCalendar, PacingPeriod, PacingState, SalesGoal,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
