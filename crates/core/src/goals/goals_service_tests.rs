//! Unit tests for the goals service.

use super::*;
use crate::commission::TierSchedule;
use crate::errors::{DatabaseError, Error, Result};
use crate::profiles::{Profile, ProfileRepositoryTrait, ProfileRole};
use crate::sales::{SaleRecord, SalesQuery, SalesRepositoryTrait};
use crate::settings::PacingSettings;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockGoalRepository {
    goals: Vec<SalesGoal>,
    fail: bool,
}

#[async_trait]
impl GoalRepositoryTrait for MockGoalRepository {
    async fn fetch_goals(
        &self,
        period: &PacingPeriod,
        salesperson_id: Option<&str>,
    ) -> Result<Vec<SalesGoal>> {
        if self.fail {
            return Err(Error::Database(DatabaseError::ConnectionFailed(
                "offline".to_string(),
            )));
        }
        Ok(self
            .goals
            .iter()
            .filter(|g| g.year == period.year() && g.month == period.month())
            .filter(|g| salesperson_id.map_or(true, |id| g.salesperson_id == id))
            .cloned()
            .collect())
    }
}

struct MockSalesRepository {
    sales: Vec<SaleRecord>,
    fail: bool,
    last_query: Mutex<Option<SalesQuery>>,
}

impl MockSalesRepository {
    fn new(sales: Vec<SaleRecord>) -> Self {
        Self {
            sales,
            fail: false,
            last_query: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SalesRepositoryTrait for MockSalesRepository {
    async fn fetch_sales(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>> {
        *self.last_query.lock().unwrap() = Some(query.clone());
        if self.fail {
            return Err(Error::Database(DatabaseError::QueryFailed(
                "permission denied".to_string(),
            )));
        }
        Ok(self
            .sales
            .iter()
            .filter(|s| query.matches(s))
            .cloned()
            .collect())
    }
}

struct MockProfileRepository {
    profiles: Vec<Profile>,
}

#[async_trait]
impl ProfileRepositoryTrait for MockProfileRepository {
    async fn get_profile(&self, profile_id: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.iter().find(|p| p.id == profile_id).cloned())
    }

    async fn list_by_roles(&self, roles: &[ProfileRole]) -> Result<Vec<Profile>> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| roles.contains(&p.role))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn profile(id: &str, role: ProfileRole, utm_code: Option<&str>) -> Profile {
    Profile {
        id: id.to_string(),
        full_name: Some(format!("User {}", id)),
        email: None,
        role,
        client_id: None,
        utm_code: utm_code.map(str::to_string),
    }
}

fn goal(salesperson_id: &str, target: Decimal) -> SalesGoal {
    SalesGoal {
        id: format!("goal-{}", salesperson_id),
        salesperson_id: salesperson_id.to_string(),
        month: 2,
        year: 2027,
        target_amount: target,
    }
}

fn sale(
    id: &str,
    salesperson_id: Option<&str>,
    utm: Option<&str>,
    day: u32,
    amount: Decimal,
) -> SaleRecord {
    SaleRecord {
        id: id.to_string(),
        client_id: "client-1".to_string(),
        salesperson_id: salesperson_id.map(str::to_string),
        amount,
        commission: None,
        product_name: "Mentoring".to_string(),
        buyer_name: None,
        buyer_email: None,
        status: "approved".to_string(),
        sale_date: NaiveDate::from_ymd_opt(2027, 2, day)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap(),
        utm_source: utm.map(str::to_string),
    }
}

fn fixture_sales() -> Vec<SaleRecord> {
    vec![
        sale("s1", Some("alice"), None, 2, dec!(3000)),
        sale("s2", None, Some("ALICE-IG"), 3, dec!(1000)),
        sale("s3", Some("bob"), None, 3, dec!(2500)),
        // Outside February
        SaleRecord {
            sale_date: NaiveDate::from_ymd_opt(2027, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            ..sale("s4", Some("alice"), None, 1, dec!(9999))
        },
    ]
}

fn fixture_profiles() -> Vec<Profile> {
    vec![
        profile("admin", ProfileRole::Admin, None),
        profile("alice", ProfileRole::Sales, Some("alice-ig")),
        profile("bob", ProfileRole::Sales, None),
    ]
}

fn build_service(
    goal_repository: MockGoalRepository,
    sales_repository: Arc<MockSalesRepository>,
    settings: PacingSettings,
) -> GoalService {
    GoalService::new(
        Arc::new(goal_repository),
        sales_repository,
        Arc::new(MockProfileRepository {
            profiles: fixture_profiles(),
        }),
        Arc::new(settings),
    )
}

fn default_goals() -> MockGoalRepository {
    MockGoalRepository {
        goals: vec![goal("alice", dec!(5000)), goal("bob", dec!(3000))],
        fail: false,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2027, 2, 10).unwrap()
}

fn feb() -> PacingPeriod {
    PacingPeriod::new(2027, 2).unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_target_sums_rows() {
    let service = build_service(
        default_goals(),
        Arc::new(MockSalesRepository::new(vec![])),
        PacingSettings::default(),
    );
    assert_eq!(service.fetch_target(&feb(), None).await.unwrap(), dec!(8000));
    assert_eq!(
        service.fetch_target(&feb(), Some("bob")).await.unwrap(),
        dec!(3000)
    );
    assert_eq!(
        service.fetch_target(&feb(), Some("carol")).await.unwrap(),
        Decimal::ZERO
    );
}

#[tokio::test]
async fn test_salesperson_view_includes_utm_attributed_sales() {
    let sales_repo = Arc::new(MockSalesRepository::new(fixture_sales()));
    let service = build_service(default_goals(), sales_repo.clone(), PacingSettings::default());
    let alice = profile("alice", ProfileRole::Sales, Some("alice-ig"));

    let progress = service
        .get_goal_progress(&alice, None, feb(), today())
        .await
        .unwrap();

    assert_eq!(progress.salesperson_id.as_deref(), Some("alice"));
    assert_eq!(progress.metrics.target, dec!(5000));
    assert_eq!(progress.metrics.achieved, dec!(4000));
    assert_eq!(progress.metrics.percentage, dec!(80));
    assert_eq!(progress.metrics.current_tier, "T1");
    assert_eq!(progress.calendar.len(), 28);

    let query = sales_repo.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(query.start, Some(feb().start_instant()));
    assert_eq!(query.end, Some(feb().end_instant()));
    assert_eq!(
        query.salesperson.unwrap().utm_code.as_deref(),
        Some("alice-ig")
    );
}

#[tokio::test]
async fn test_admin_selecting_salesperson_looks_up_their_utm() {
    let service = build_service(
        default_goals(),
        Arc::new(MockSalesRepository::new(fixture_sales())),
        PacingSettings::default(),
    );
    let admin = profile("admin", ProfileRole::Admin, None);

    let progress = service
        .get_goal_progress(&admin, Some("alice"), feb(), today())
        .await
        .unwrap();
    assert_eq!(progress.metrics.achieved, dec!(4000));
}

#[tokio::test]
async fn test_admin_overview_aggregates_everyone() {
    let service = build_service(
        default_goals(),
        Arc::new(MockSalesRepository::new(fixture_sales())),
        PacingSettings::default(),
    );
    let admin = profile("admin", ProfileRole::Admin, None);

    let progress = service
        .get_goal_progress(&admin, None, feb(), today())
        .await
        .unwrap();
    assert_eq!(progress.salesperson_id, None);
    assert_eq!(progress.metrics.target, dec!(8000));
    assert_eq!(progress.metrics.achieved, dec!(6500));
}

#[tokio::test]
async fn test_tier_table_and_commission_follow_settings() {
    let settings = PacingSettings {
        fixed_monthly_fee: Some(dec!(1000)),
        ..PacingSettings::default()
    };
    let service = build_service(
        default_goals(),
        Arc::new(MockSalesRepository::new(fixture_sales())),
        settings,
    );
    let alice = profile("alice", ProfileRole::Sales, Some("alice-ig"));

    let progress = service
        .get_goal_progress(&alice, None, feb(), today())
        .await
        .unwrap();
    assert_eq!(progress.tiers.len(), TierSchedule::default().tiers.len());
    assert_eq!(progress.tiers[0].required_revenue, dec!(3500));
    assert!(progress.tiers[0].is_achieved);
    assert!(progress.tiers[0].is_current);
    assert_eq!(progress.next_tier.as_ref().map(|t| t.id.as_str()), Some("T2"));
    assert_eq!(progress.commission.variable, dec!(28));
    assert_eq!(progress.commission.total, dec!(1028));
}

#[tokio::test]
async fn test_failed_fetches_degrade_to_empty_snapshot() {
    let failing_sales = Arc::new(MockSalesRepository {
        sales: fixture_sales(),
        fail: true,
        last_query: Mutex::new(None),
    });
    let service = build_service(
        MockGoalRepository {
            goals: vec![],
            fail: true,
        },
        failing_sales,
        PacingSettings::default(),
    );
    let alice = profile("alice", ProfileRole::Sales, Some("alice-ig"));

    let progress = service
        .get_goal_progress(&alice, None, feb(), today())
        .await
        .unwrap();
    assert_eq!(progress.metrics.target, Decimal::ZERO);
    assert_eq!(progress.metrics.achieved, Decimal::ZERO);
    assert_eq!(progress.metrics.daily_required, Decimal::ZERO);
    assert_eq!(progress.metrics.current_tier, "T0");
}

#[tokio::test]
async fn test_fetch_target_propagates_repository_errors() {
    let service = build_service(
        MockGoalRepository {
            goals: vec![],
            fail: true,
        },
        Arc::new(MockSalesRepository::new(vec![])),
        PacingSettings::default(),
    );
    assert!(matches!(
        service.fetch_target(&feb(), None).await,
        Err(Error::Database(_))
    ));
}
