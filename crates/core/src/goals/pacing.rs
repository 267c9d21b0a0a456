//! Goal pacing engine.
//!
//! Pure functions over a snapshot of sales and a monthly target. "Today" is
//! always passed in explicitly so the same inputs give the same output.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use super::goals_model::{DayStatus, GoalsMetrics, PacingCalendar, PacingPeriod, PacingState};
use crate::commission::TierSchedule;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, HUNDRED};
use crate::sales::{total_amount, SaleRecord};
use crate::utils::time_utils::is_weekend;

/// Realized sales grouped by day of month.
///
/// Callers are expected to pass sales from a single month; records are keyed
/// on their calendar day only.
pub fn sales_by_day(sales: &[SaleRecord]) -> BTreeMap<u32, Decimal> {
    let mut by_day: BTreeMap<u32, Decimal> = BTreeMap::new();
    for sale in sales {
        *by_day.entry(sale.sale_day().day()).or_insert(Decimal::ZERO) += sale.amount;
    }
    by_day
}

/// Weekdays in the whole month.
pub fn count_working_days(period: &PacingPeriod) -> u32 {
    period.days().filter(|d| !is_weekend(*d)).count() as u32
}

/// Weekdays from `today` (inclusive) through month end.
pub fn working_days_from(period: &PacingPeriod, today: NaiveDate) -> u32 {
    period
        .days()
        .filter(|d| *d >= today && !is_weekend(*d))
        .count() as u32
}

/// Weekdays strictly after `today` through month end.
pub fn working_days_after(period: &PacingPeriod, today: NaiveDate) -> u32 {
    period
        .days()
        .filter(|d| *d > today && !is_weekend(*d))
        .count() as u32
}

/// Remaining balance spread evenly over `working_days`. Zero once the target is met.
pub fn even_pace(target: Decimal, achieved: Decimal, working_days: u32) -> Decimal {
    if working_days == 0 {
        return Decimal::ZERO;
    }
    (target - achieved).max(Decimal::ZERO) / Decimal::from(working_days)
}

/// `achieved / target * 100`, or zero without a positive target.
pub fn percentage_of(achieved: Decimal, target: Decimal) -> Decimal {
    if target > Decimal::ZERO {
        achieved / target * HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Straight-line projection of `achieved` to the end of the month.
///
/// Before the month starts nothing has elapsed, so the achieved amount is
/// returned as-is.
pub fn linear_projection(achieved: Decimal, period: &PacingPeriod, today: NaiveDate) -> Decimal {
    let elapsed = period.elapsed_days(today);
    if elapsed == 0 {
        return achieved;
    }
    achieved * Decimal::from(period.days_in_month()) / Decimal::from(elapsed)
}

/// Summary KPIs for a month.
///
/// `sales` must already be limited to the month. A negative target is treated
/// as no target.
pub fn calculate_metrics(
    target: Decimal,
    sales: &[SaleRecord],
    period: &PacingPeriod,
    today: NaiveDate,
    schedule: &TierSchedule,
) -> GoalsMetrics {
    let target = target.max(Decimal::ZERO);
    let achieved = total_amount(sales);
    let percentage = percentage_of(achieved, target);
    let days_left = working_days_from(period, today);

    let metrics = GoalsMetrics {
        target,
        achieved,
        percentage,
        current_tier: schedule.classify(percentage),
        days_left,
        daily_required: even_pace(target, achieved, days_left),
        projected: linear_projection(achieved, period, today),
    };
    debug!(
        "Metrics for {}-{:02}: achieved {} of {} ({}%), tier {}, {} working days left",
        period.year(),
        period.month(),
        metrics.achieved,
        metrics.target,
        metrics.percentage.round_dp(DISPLAY_DECIMAL_PRECISION),
        metrics.current_tier,
        metrics.days_left
    );
    metrics
}

impl PacingState {
    /// Balance at the start of the month, before any day is realized.
    pub fn opening(target: Decimal, total_working_days: u32) -> Self {
        PacingState {
            remaining_target: target,
            working_days_left: total_working_days,
        }
    }

    /// Goal for the next working day given the balance carried so far.
    pub fn daily_goal(&self) -> Decimal {
        if self.working_days_left == 0 {
            return Decimal::ZERO;
        }
        self.remaining_target.max(Decimal::ZERO) / Decimal::from(self.working_days_left)
    }

    /// Produces the cell for `date` and the balance carried into the next day.
    ///
    /// Only past days move the balance, and they always subtract what was
    /// actually sold: a missed day raises the following goals, a strong day
    /// lowers them. Today is shown against the goal computed so far. Future
    /// days show the flat `future_pace` instead of a simulated goal.
    pub fn advance(
        self,
        date: NaiveDate,
        today: NaiveDate,
        realized: Decimal,
        future_pace: Decimal,
    ) -> (PacingState, DayStatus) {
        let weekend = is_weekend(date);
        let is_past = date < today;
        let is_today = date == today;
        let daily_goal = if weekend {
            Decimal::ZERO
        } else {
            self.daily_goal()
        };

        let (value, target_value, next) = if is_past {
            let next = PacingState {
                remaining_target: self.remaining_target - realized,
                working_days_left: if weekend {
                    self.working_days_left
                } else {
                    self.working_days_left.saturating_sub(1)
                },
            };
            (realized, daily_goal, next)
        } else if is_today {
            (realized, daily_goal, self)
        } else {
            (future_pace, Decimal::ZERO, self)
        };

        let status = DayStatus {
            date,
            day: date.day(),
            value: if weekend { Decimal::ZERO } else { value },
            target_value,
            is_past,
            is_today,
            is_weekend: weekend,
        };
        (next, status)
    }
}

/// Day-by-day pacing calendar for a month.
///
/// Built as a left fold over the days of the month; the returned
/// `closing_state` is the balance after the last realized (past) day.
pub fn build_calendar(
    target: Decimal,
    sales: &[SaleRecord],
    period: &PacingPeriod,
    today: NaiveDate,
) -> PacingCalendar {
    let target = target.max(Decimal::ZERO);
    let achieved = total_amount(sales);
    let by_day = sales_by_day(sales);
    let future_pace = even_pace(target, achieved, working_days_after(period, today));
    let opening = PacingState::opening(target, count_working_days(period));

    let (days, closing_state) = period.days().fold(
        (
            Vec::with_capacity(period.days_in_month() as usize),
            opening,
        ),
        |(mut days, state), date| {
            let realized = by_day.get(&date.day()).copied().unwrap_or(Decimal::ZERO);
            let (next, status) = state.advance(date, today, realized, future_pace);
            days.push(status);
            (days, next)
        },
    );

    PacingCalendar {
        days,
        closing_state,
    }
}
