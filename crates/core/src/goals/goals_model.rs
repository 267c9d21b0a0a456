//! Goals domain models.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::commission::{CommissionEstimate, TierTableRow};
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a monthly sales goal row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesGoal {
    pub id: String,
    pub salesperson_id: String,
    pub month: u32,
    pub year: i32,
    pub target_amount: Decimal,
}

/// A validated calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PacingPeriod {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    days_in_month: u32,
}

impl PacingPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth(month).into());
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Year {} is out of range",
                year
            )))
        })?;
        let next_month = first_day
            .checked_add_months(Months::new(1))
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Month after {}-{:02} is out of range",
                    year, month
                )))
            })?;
        let days_in_month = (next_month - first_day).num_days() as u32;

        Ok(PacingPeriod {
            year,
            month,
            first_day,
            days_in_month,
        })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day + Duration::days(i64::from(self.days_in_month) - 1)
    }

    /// Every calendar day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first_day
            .iter_days()
            .take(self.days_in_month as usize)
    }

    /// First instant of the month (00:00 on day 1).
    pub fn start_instant(&self) -> NaiveDateTime {
        self.first_day.and_time(NaiveTime::MIN)
    }

    /// Last instant of the month (the nanosecond before the next month starts).
    pub fn end_instant(&self) -> NaiveDateTime {
        (self.last_day() + Duration::days(1)).and_time(NaiveTime::MIN) - Duration::nanoseconds(1)
    }

    /// Days of this month already elapsed as of `today`, today included.
    ///
    /// Zero when the month lies in the future, the whole month once it is over.
    pub fn elapsed_days(&self, today: NaiveDate) -> u32 {
        if today < self.first_day {
            0
        } else if today > self.last_day() {
            self.days_in_month
        } else {
            today.day()
        }
    }
}

/// Summary KPIs for one month of a salesperson (or the aggregate).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalsMetrics {
    pub target: Decimal,
    pub achieved: Decimal,
    /// `achieved / target * 100`, zero when there is no target. Not clamped.
    pub percentage: Decimal,
    pub current_tier: String,
    /// Working days from today (inclusive) through month end.
    pub days_left: u32,
    /// Pace needed per remaining working day. Never negative.
    pub daily_required: Decimal,
    /// Linear extrapolation of `achieved` to month end.
    pub projected: Decimal,
}

/// One calendar cell of the pacing view.
///
/// For past days and today `value` is what was sold; for future days it is the
/// flat pace still required. `target_value` is the progressive goal the day was
/// measured against, zero for weekends and future days.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    pub date: NaiveDate,
    pub day: u32,
    pub value: Decimal,
    pub target_value: Decimal,
    pub is_past: bool,
    pub is_today: bool,
    pub is_weekend: bool,
}

impl DayStatus {
    pub fn is_future(&self) -> bool {
        !self.is_past && !self.is_today
    }
}

/// Running balance carried from one day to the next while building the calendar.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PacingState {
    pub remaining_target: Decimal,
    pub working_days_left: u32,
}

/// Calendar days plus the balance left after the last realized day.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PacingCalendar {
    pub days: Vec<DayStatus>,
    pub closing_state: PacingState,
}

/// Everything the goals screen renders for one month.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub period: PacingPeriod,
    /// `None` for the aggregate (all salespeople) view.
    pub salesperson_id: Option<String>,
    pub metrics: GoalsMetrics,
    pub calendar: Vec<DayStatus>,
    pub tiers: Vec<TierTableRow>,
    pub next_tier: Option<TierTableRow>,
    pub commission: CommissionEstimate,
}
