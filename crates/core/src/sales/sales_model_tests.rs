#[cfg(test)]
mod tests {
    use crate::profiles::{Profile, ProfileRole};
    use crate::sales::{
        total_amount, SaleRecord, SalesQuery, SalespersonFilter, SALE_STATUS_CANCELLED,
        SALE_STATUS_COMPLETED,
    };
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2027, 2, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn sale(salesperson_id: Option<&str>, utm: Option<&str>, status: &str) -> SaleRecord {
        SaleRecord {
            id: "sale-1".to_string(),
            client_id: "client-1".to_string(),
            salesperson_id: salesperson_id.map(str::to_string),
            amount: dec!(1200),
            commission: None,
            product_name: "Mentoring".to_string(),
            buyer_name: None,
            buyer_email: None,
            status: status.to_string(),
            sale_date: at(10, 23, 30),
            utm_source: utm.map(str::to_string),
        }
    }

    fn salesperson(id: &str, utm_code: Option<&str>) -> Profile {
        Profile {
            id: id.to_string(),
            full_name: None,
            email: None,
            role: ProfileRole::Sales,
            client_id: None,
            utm_code: utm_code.map(str::to_string),
        }
    }

    #[test]
    fn test_sale_day_ignores_time_of_day() {
        let record = sale(None, None, SALE_STATUS_COMPLETED);
        assert_eq!(record.sale_day(), NaiveDate::from_ymd_opt(2027, 2, 10).unwrap());
    }

    #[test]
    fn test_cancelled_status_is_case_insensitive() {
        assert!(sale(None, None, SALE_STATUS_CANCELLED).is_cancelled());
        assert!(sale(None, None, "Cancelled").is_cancelled());
        assert!(!sale(None, None, SALE_STATUS_COMPLETED).is_cancelled());
    }

    #[test]
    fn test_attribution_by_reference_or_utm() {
        let alice = salesperson("alice", Some("alice-ig"));
        assert!(sale(Some("alice"), None, SALE_STATUS_COMPLETED).is_attributed_to(&alice));
        assert!(sale(None, Some("ALICE-IG"), SALE_STATUS_COMPLETED).is_attributed_to(&alice));
        assert!(!sale(Some("bob"), Some("bob-yt"), SALE_STATUS_COMPLETED).is_attributed_to(&alice));
        assert!(!sale(None, None, SALE_STATUS_COMPLETED).is_attributed_to(&alice));
    }

    #[test]
    fn test_empty_utm_code_never_matches() {
        let filter = SalespersonFilter::from(&salesperson("carol", Some("")));
        assert_eq!(filter.utm_code, None);
        assert!(!filter.matches(&sale(None, Some(""), SALE_STATUS_COMPLETED)));
    }

    #[test]
    fn test_query_bounds_are_inclusive() {
        let record = sale(None, None, SALE_STATUS_COMPLETED);
        assert!(SalesQuery::between(at(10, 23, 30), at(10, 23, 30)).matches(&record));
        assert!(!SalesQuery::between(at(11, 0, 0), at(12, 0, 0)).matches(&record));
        assert!(!SalesQuery::between(at(1, 0, 0), at(10, 23, 29)).matches(&record));
        assert!(SalesQuery::default().matches(&record));
    }

    #[test]
    fn test_query_client_salesperson_and_status_clauses() {
        let alice = salesperson("alice", Some("alice-ig"));
        let record = sale(None, Some("alice-ig"), SALE_STATUS_CANCELLED);

        let base = SalesQuery::between(at(1, 0, 0), at(28, 23, 59));
        assert!(base
            .clone()
            .with_salesperson(Some(SalespersonFilter::from(&alice)))
            .matches(&record));
        assert!(!base
            .clone()
            .with_client(Some("client-2".to_string()))
            .matches(&record));
        assert!(!base.clone().excluding_cancelled().matches(&record));
    }

    #[test]
    fn test_total_amount() {
        let sales = vec![
            sale(None, None, SALE_STATUS_COMPLETED),
            sale(None, None, SALE_STATUS_COMPLETED),
        ];
        assert_eq!(total_amount(&sales), dec!(2400));
        assert_eq!(total_amount(&[]), dec!(0));
    }
}
