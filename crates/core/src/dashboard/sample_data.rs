//! Sample sales shown when the data source has nothing to offer.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::sales::{
    SaleRecord, SALE_STATUS_APPROVED, SALE_STATUS_COMPLETED, SALE_STATUS_PENDING,
};

const SAMPLE_CLIENT_ID: &str = "sample-client";

fn sample_sale(
    id: &str,
    amount: Decimal,
    product_name: &str,
    buyer_name: &str,
    buyer_email: &str,
    status: &str,
    sale_date: NaiveDateTime,
) -> SaleRecord {
    SaleRecord {
        id: id.to_string(),
        client_id: SAMPLE_CLIENT_ID.to_string(),
        salesperson_id: None,
        amount,
        commission: Some(amount / dec!(10)),
        product_name: product_name.to_string(),
        buyer_name: Some(buyer_name.to_string()),
        buyer_email: Some(buyer_email.to_string()),
        status: status.to_string(),
        sale_date,
        utm_source: None,
    }
}

/// Four sales spread over the last four days, most recent first.
pub fn sample_sales(today: NaiveDate) -> Vec<SaleRecord> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
    let at = |days_ago: i64| (today - Duration::days(days_ago)).and_time(noon);
    vec![
        sample_sale(
            "sample-1",
            dec!(5000),
            "Marketing Consulting",
            "Acme Corp",
            "contact@acme.com",
            SALE_STATUS_COMPLETED,
            at(0),
        ),
        sample_sale(
            "sample-2",
            dec!(3200),
            "Sales Training",
            "Globex Inc",
            "hr@globex.com",
            SALE_STATUS_APPROVED,
            at(1),
        ),
        sample_sale(
            "sample-3",
            dec!(1500),
            "SEO Audit",
            "Soylent Corp",
            "info@soylent.com",
            SALE_STATUS_PENDING,
            at(2),
        ),
        sample_sale(
            "sample-4",
            dec!(8000),
            "Web Development",
            "Massive Dynamic",
            "tech@massive.com",
            SALE_STATUS_COMPLETED,
            at(3),
        ),
    ]
}
