//! Test fixtures and data for commission tests
//!
//! Consistent networks and sales used across all test suites.

use chrono::NaiveDate;
use commission::{CommissionEngine, Dataset, InMemoryDataProvider};
use rust_decimal::Decimal;
use shared::{Sale, User};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Demo network ids (top sponsor first)
    pub const JOHN: &'static str = "user-123";
    pub const JANE: &'static str = "user-456";
    pub const BOB: &'static str = "user-789";
    pub const ALICE: &'static str = "user-999";

    pub const SALE_1: &'static str = "sale-1";

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// The four demo users, top sponsor first
    pub fn demo_users() -> Vec<User> {
        vec![
            User::new(Self::JOHN, "John Doe"),
            User::new(Self::JANE, "Jane Smith").referred_by(Self::JOHN),
            User::new(Self::BOB, "Bob Johnson").referred_by(Self::JANE),
            User::new(Self::ALICE, "Alice Brown").referred_by(Self::BOB),
        ]
    }

    /// Demo network where `sale-1` is sold by the bottom of the chain
    pub fn four_deep_chain(amount: Decimal) -> Dataset {
        Dataset {
            users: Self::demo_users(),
            sales: vec![Sale::new(Self::SALE_1, Self::ALICE, amount, Self::date(2025, 1, 28))],
        }
    }

    /// Seven-user straight line, `u0` sells, `u6` at the top
    pub fn long_chain() -> Dataset {
        let users = (0..7)
            .map(|i| {
                let user = User::new(format!("u{i}"), format!("User {i}"));
                if i < 6 {
                    user.referred_by(format!("u{}", i + 1))
                } else {
                    user
                }
            })
            .collect();

        Dataset {
            users,
            sales: vec![Sale::new("long-sale", "u0", Decimal::from(100), Self::date(2025, 3, 1))],
        }
    }

    /// Two users sponsoring each other
    pub fn cyclic_pair() -> Dataset {
        Dataset {
            users: vec![
                User::new("loop-a", "Loop A").referred_by("loop-b"),
                User::new("loop-b", "Loop B").referred_by("loop-a"),
            ],
            sales: vec![Sale::new("loop-sale", "loop-a", Decimal::from(100), Self::date(2025, 2, 1))],
        }
    }

    /// A sale whose seller is missing from the user table
    pub fn orphan_sale() -> Dataset {
        let mut dataset = Dataset::demo();
        dataset
            .sales
            .push(Sale::new("sale-orphan", "user-gone", Decimal::from(10), Self::date(2025, 1, 2)));
        dataset
    }

    pub fn demo_engine() -> CommissionEngine<InMemoryDataProvider> {
        CommissionEngine::new(InMemoryDataProvider::demo())
    }

    pub fn engine_for(dataset: Dataset) -> CommissionEngine<InMemoryDataProvider> {
        CommissionEngine::new(InMemoryDataProvider::new(dataset))
    }

    /// Amounts used for distribution property checks
    pub fn sample_amounts() -> Vec<Decimal> {
        ["0.01", "0.03", "0.07", "1.00", "1.99", "3.33", "10.005", "99.99", "1000", "123456.78"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect()
    }
}
