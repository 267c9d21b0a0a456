use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;
use salesboard_core::{
    dashboard::{DashboardService, DashboardServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    leaderboard::{LeaderboardService, LeaderboardServiceTrait},
    profiles::ProfileRepositoryTrait,
    settings::PacingSettings,
    utils::time_utils::local_today,
};
use salesboard_storage_snapshot::{
    GoalRepository, ProfileRepository, SalesRepository, SnapshotStore,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
    pub leaderboard_service: Arc<dyn LeaderboardServiceTrait + Send + Sync>,
    pub profile_repository: Arc<dyn ProfileRepositoryTrait>,
    pub timezone: Tz,
}

impl AppState {
    /// Current calendar day in the configured timezone.
    pub fn today(&self) -> NaiveDate {
        local_today(self.timezone)
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("SB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn load_settings(config: &Config) -> anyhow::Result<PacingSettings> {
    let mut settings = match &config.settings_file {
        Some(path) => PacingSettings::load_from_file(path)?,
        None => {
            tracing::info!("No SB_SETTINGS_FILE set, using default pacing settings");
            PacingSettings::default()
        }
    };
    if let Some(tz) = &config.timezone {
        settings.timezone = tz.clone();
    }
    settings.validate()?;
    Ok(settings)
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let settings = Arc::new(load_settings(config)?);
    let timezone = settings.tz()?;
    tracing::info!(
        "Timezone {}, {} commission tiers",
        timezone,
        settings.tier_schedule.tiers.len()
    );

    let store = SnapshotStore::load(&config.data_file, timezone)?;
    tracing::info!("Data snapshot in use: {}", config.data_file);

    let goal_repository = Arc::new(GoalRepository::new(store.snapshot()));
    let sales_repository = Arc::new(SalesRepository::new(store.snapshot()));
    let profile_repository = Arc::new(ProfileRepository::new(store.snapshot()));

    let goal_service = Arc::new(GoalService::new(
        goal_repository.clone(),
        sales_repository.clone(),
        profile_repository.clone(),
        settings.clone(),
    ));
    let dashboard_service = Arc::new(DashboardService::new(sales_repository.clone()));
    let leaderboard_service = Arc::new(LeaderboardService::new(
        profile_repository.clone(),
        goal_repository,
        sales_repository,
    ));

    Ok(Arc::new(AppState {
        goal_service,
        dashboard_service,
        leaderboard_service,
        profile_repository,
        timezone,
    }))
}
