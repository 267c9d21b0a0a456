use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for money values handed to the presentation layer
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of entries kept in the top products ranking
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Length of the trailing daily revenue series on the dashboard
pub const DAILY_SERIES_DAYS: i64 = 30;

/// Default IANA timezone used to derive "today" for pacing views
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Percent scale factor
pub const HUNDRED: Decimal = dec!(100);
