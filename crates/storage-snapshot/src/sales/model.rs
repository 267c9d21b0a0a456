//! Row model for the `sales` table.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use salesboard_core::sales::SaleRecord;
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;

/// Sale row as exported from the upstream database
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaleRow {
    pub id: String,
    pub client_id: String,
    #[serde(default)]
    pub salesperson_id: Option<String>,
    pub amount: Decimal,
    #[serde(default)]
    pub commission: Option<Decimal>,
    pub product_name: String,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub buyer_email: Option<String>,
    pub status: String,
    pub sale_date: String,
    #[serde(default)]
    pub utm_source: Option<String>,
}

/// Reads a sale timestamp as a local calendar time.
///
/// RFC 3339 values are shifted into `tz`. Naive timestamps and bare dates are
/// kept as-is, a bare date landing at midnight.
pub fn parse_sale_date(raw: &str, tz: Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&tz).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

impl SaleRow {
    pub fn into_domain(self, tz: Tz) -> Result<SaleRecord, StorageError> {
        let sale_date =
            parse_sale_date(&self.sale_date, tz).ok_or_else(|| StorageError::InvalidRow {
                table: "sales",
                id: self.id.clone(),
                reason: format!("unreadable sale_date '{}'", self.sale_date),
            })?;
        Ok(SaleRecord {
            id: self.id,
            client_id: self.client_id,
            salesperson_id: self.salesperson_id.filter(|id| !id.is_empty()),
            amount: self.amount,
            commission: self.commission,
            product_name: self.product_name,
            buyer_name: self.buyer_name,
            buyer_email: self.buyer_email,
            status: self.status,
            sale_date,
            utm_source: self.utm_source.filter(|utm| !utm.is_empty()),
        })
    }
}
