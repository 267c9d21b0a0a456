use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::errors::{Error, Result};

/// Parses an IANA timezone name such as `America/Sao_Paulo`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::InvalidConfigValue(format!("Unknown timezone '{}'", name)))
}

/// Converts a UTC instant to the calendar date observed in the given timezone.
///
/// This is the single source of truth for deriving a business date from a
/// timestamp. Every "is this the same day" comparison works on the result.
pub fn local_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's calendar date in the given timezone.
pub fn local_today(tz: Tz) -> NaiveDate {
    local_date_from_utc(Utc::now(), tz)
}

/// Saturday and Sunday are the only non-working days; holidays are not modeled.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// The `count` calendar days ending at `end` (inclusive), oldest first.
pub fn trailing_days(end: NaiveDate, count: i64) -> Vec<NaiveDate> {
    if count <= 0 {
        return Vec::new();
    }
    let start = end - Duration::days(count - 1);
    get_days_between(start, end)
}
