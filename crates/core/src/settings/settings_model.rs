//! Pacing settings loaded from a JSON file.

use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::commission::TierSchedule;
use crate::constants::DEFAULT_TIMEZONE;
use crate::errors::{Error, Result};
use crate::utils::time_utils::parse_timezone;

/// Business settings for goal pacing and commission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PacingSettings {
    pub tier_schedule: TierSchedule,
    /// Flat amount added on top of the tiered commission each month.
    pub fixed_monthly_fee: Option<Decimal>,
    /// IANA timezone used to decide what "today" is.
    pub timezone: String,
}

impl Default for PacingSettings {
    fn default() -> Self {
        PacingSettings {
            tier_schedule: TierSchedule::default(),
            fixed_monthly_fee: None,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl PacingSettings {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let settings: PacingSettings = serde_json::from_str(raw)
            .map_err(|e| Error::InvalidConfigValue(format!("Invalid settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        let settings = Self::from_json_str(&raw)?;
        info!(
            "Loaded pacing settings from {} ({} tiers)",
            path.display(),
            settings.tier_schedule.tiers.len()
        );
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.tier_schedule.validate()?;
        if self.fixed_monthly_fee.is_some_and(|fee| fee < Decimal::ZERO) {
            return Err(Error::InvalidConfigValue(
                "fixedMonthlyFee must not be negative".to_string(),
            ));
        }
        parse_timezone(&self.timezone)?;
        Ok(())
    }

    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }
}
