//! Sales domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sales_constants::SALE_STATUS_CANCELLED;
use crate::profiles::Profile;

/// A single sale transaction as read from the data source.
///
/// `sale_date` is timezone-naive and interpreted as local time; its calendar
/// day is the only thing the pacing engine looks at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: String,
    pub client_id: String,
    pub salesperson_id: Option<String>,
    pub amount: Decimal,
    pub commission: Option<Decimal>,
    pub product_name: String,
    pub buyer_name: Option<String>,
    pub buyer_email: Option<String>,
    pub status: String,
    pub sale_date: NaiveDateTime,
    pub utm_source: Option<String>,
}

impl SaleRecord {
    /// Calendar day of the sale.
    pub fn sale_day(&self) -> NaiveDate {
        self.sale_date.date()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.eq_ignore_ascii_case(SALE_STATUS_CANCELLED)
    }

    /// A sale belongs to a salesperson either through the direct reference or
    /// through a UTM source matching the salesperson's UTM code (case-insensitive).
    pub fn is_attributed_to(&self, profile: &Profile) -> bool {
        SalespersonFilter::from(profile).matches(self)
    }
}

/// Attribution filter applied to a sales query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalespersonFilter {
    pub salesperson_id: String,
    pub utm_code: Option<String>,
}

impl From<&Profile> for SalespersonFilter {
    fn from(profile: &Profile) -> Self {
        SalespersonFilter {
            salesperson_id: profile.id.clone(),
            utm_code: profile.utm_code.clone().filter(|c| !c.is_empty()),
        }
    }
}

impl SalespersonFilter {
    pub fn matches(&self, sale: &SaleRecord) -> bool {
        if sale.salesperson_id.as_deref() == Some(self.salesperson_id.as_str()) {
            return true;
        }
        match (self.utm_code.as_deref(), sale.utm_source.as_deref()) {
            (Some(code), Some(source)) => code.eq_ignore_ascii_case(source),
            _ => false,
        }
    }
}

/// Query parameters for fetching sales.
///
/// Both bounds are inclusive. `None` leaves that side of the window open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesQuery {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub client_id: Option<String>,
    pub salesperson: Option<SalespersonFilter>,
    pub exclude_cancelled: bool,
}

impl SalesQuery {
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        SalesQuery {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    pub fn with_salesperson(mut self, filter: Option<SalespersonFilter>) -> Self {
        self.salesperson = filter;
        self
    }

    pub fn with_client(mut self, client_id: Option<String>) -> Self {
        self.client_id = client_id;
        self
    }

    pub fn excluding_cancelled(mut self) -> Self {
        self.exclude_cancelled = true;
        self
    }

    /// Whether a sale satisfies every clause of this query.
    pub fn matches(&self, sale: &SaleRecord) -> bool {
        if self.start.is_some_and(|s| sale.sale_date < s) {
            return false;
        }
        if self.end.is_some_and(|e| sale.sale_date > e) {
            return false;
        }
        if let Some(client_id) = &self.client_id {
            if &sale.client_id != client_id {
                return false;
            }
        }
        if self.exclude_cancelled && sale.is_cancelled() {
            return false;
        }
        self.salesperson
            .as_ref()
            .map_or(true, |filter| filter.matches(sale))
    }
}

/// Sum of sale amounts.
pub fn total_amount<'a>(sales: impl IntoIterator<Item = &'a SaleRecord>) -> Decimal {
    sales.into_iter().map(|s| s.amount).sum()
}
