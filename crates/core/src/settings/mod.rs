//! Settings module - pacing and commission configuration.

mod settings_model;

pub use settings_model::PacingSettings;
