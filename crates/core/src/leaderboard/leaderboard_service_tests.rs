//! Unit tests for the leaderboard service.

use super::*;
use crate::errors::{DatabaseError, Error, Result};
use crate::goals::{GoalRepositoryTrait, PacingPeriod, SalesGoal};
use crate::profiles::{Profile, ProfileRepositoryTrait, ProfileRole};
use crate::sales::{SaleRecord, SalesQuery, SalesRepositoryTrait};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

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

struct MockGoalRepository {
    goals: Vec<SalesGoal>,
}

#[async_trait]
impl GoalRepositoryTrait for MockGoalRepository {
    async fn fetch_goals(
        &self,
        period: &PacingPeriod,
        _salesperson_id: Option<&str>,
    ) -> Result<Vec<SalesGoal>> {
        Ok(self
            .goals
            .iter()
            .filter(|g| g.year == period.year() && g.month == period.month())
            .cloned()
            .collect())
    }
}

struct MockSalesRepository {
    sales: Vec<SaleRecord>,
    fail: bool,
}

#[async_trait]
impl SalesRepositoryTrait for MockSalesRepository {
    async fn fetch_sales(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>> {
        if self.fail {
            return Err(Error::Database(DatabaseError::QueryFailed(
                "timeout".to_string(),
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

fn profile(id: &str, name: &str, role: ProfileRole, utm_code: Option<&str>) -> Profile {
    Profile {
        id: id.to_string(),
        full_name: Some(name.to_string()),
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

fn sale(id: &str, salesperson_id: Option<&str>, utm: Option<&str>, amount: Decimal, status: &str) -> SaleRecord {
    SaleRecord {
        id: id.to_string(),
        client_id: "client-1".to_string(),
        salesperson_id: salesperson_id.map(str::to_string),
        amount,
        commission: None,
        product_name: "Mentoring".to_string(),
        buyer_name: None,
        buyer_email: None,
        status: status.to_string(),
        sale_date: NaiveDate::from_ymd_opt(2027, 2, 5)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap(),
        utm_source: utm.map(str::to_string),
    }
}

fn profiles() -> Vec<Profile> {
    vec![
        profile("admin", "Ana Admin", ProfileRole::Admin, None),
        profile("alice", "Alice", ProfileRole::Sales, Some("alice-ig")),
        profile("bob", "Bob", ProfileRole::Sales, None),
        profile("carol", "Carol", ProfileRole::Sales, None),
        profile("dave", "Dave", ProfileRole::Sales, None),
        profile("client", "Client User", ProfileRole::Client, None),
    ]
}

fn goals() -> Vec<SalesGoal> {
    vec![
        goal("alice", dec!(5000)),
        goal("bob", dec!(3000)),
        goal("carol", dec!(0)),
    ]
}

fn sales() -> Vec<SaleRecord> {
    vec![
        sale("s1", Some("alice"), None, dec!(3000), "completed"),
        sale("s2", None, Some("Alice-IG"), dec!(1000), "approved"),
        sale("s3", Some("alice"), None, dec!(2000), "cancelled"),
        sale("s4", Some("bob"), None, dec!(3000), "completed"),
        sale("s5", Some("dave"), None, dec!(500), "pending"),
        sale("s6", None, None, dec!(700), "completed"),
    ]
}

fn feb() -> PacingPeriod {
    PacingPeriod::new(2027, 2).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2027, 2, 14).unwrap()
}

fn service(fail_sales: bool) -> LeaderboardService {
    LeaderboardService::new(
        Arc::new(MockProfileRepository {
            profiles: profiles(),
        }),
        Arc::new(MockGoalRepository { goals: goals() }),
        Arc::new(MockSalesRepository {
            sales: sales(),
            fail: fail_sales,
        }),
    )
}

#[tokio::test]
async fn test_leaderboard_ranks_by_percentage() {
    let board = service(false).get_leaderboard(feb(), today()).await.unwrap();

    let ids: Vec<&str> = board
        .entries
        .iter()
        .map(|e| e.salesperson_id.as_str())
        .collect();
    assert_eq!(ids, vec!["bob", "alice", "dave"]);

    let alice = &board.entries[1];
    assert_eq!(alice.target, dec!(5000));
    assert_eq!(alice.achieved, dec!(4000));
    assert_eq!(alice.percentage, dec!(80));
    assert_eq!(alice.gap, dec!(1000));
    assert_eq!(alice.projected, dec!(8000));

    let dave = &board.entries[2];
    assert_eq!(dave.target, Decimal::ZERO);
    assert_eq!(dave.percentage, Decimal::ZERO);
}

#[tokio::test]
async fn test_leaderboard_totals_include_unattributed_sales() {
    let board = service(false).get_leaderboard(feb(), today()).await.unwrap();
    assert_eq!(board.totals.target, dec!(8000));
    assert_eq!(board.totals.achieved, dec!(8200));
    assert_eq!(board.totals.gap, Decimal::ZERO);
    assert_eq!(board.totals.percentage, dec!(102.5));
}

#[tokio::test]
async fn test_leaderboard_propagates_fetch_errors() {
    let result = service(true).get_leaderboard(feb(), today()).await;
    assert!(matches!(result, Err(Error::Database(_))));
}

#[test]
fn test_ties_are_broken_by_name() {
    let people = vec![
        profile("z", "Zoe", ProfileRole::Sales, None),
        profile("m", "Mia", ProfileRole::Sales, None),
    ];
    let targets = vec![goal("z", dec!(1000)), goal("m", dec!(2000))];
    let records = vec![
        sale("a", Some("z"), None, dec!(500), "completed"),
        sale("b", Some("m"), None, dec!(1000), "completed"),
    ];
    let (entries, totals) = rank_salespeople(&people, &targets, &records, &feb(), today());
    assert_eq!(entries[0].name, "Mia");
    assert_eq!(entries[1].name, "Zoe");
    assert_eq!(totals.gap, dec!(1500));
    assert_eq!(totals.percentage, dec!(50));
}
