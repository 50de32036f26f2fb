//! Test helpers and builder patterns for commission tests
//!
//! `EngineBuilder` wires a `MockDataProvider` that answers from fixture data,
//! with the option of making one query fail like a broken backend would.

use commission::{CommissionEngine, CommissionError, DataProviderError, ErrorKind, MockDataProvider};
use rust_decimal::Decimal;
use shared::{Sale, User};
use std::sync::Arc;

/// Data provider queries that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCall {
    FindUser,
    FindSale,
    SalesByUser,
    ListSales,
    DirectReferrals,
}

/// Builder for engines backed by a scripted mock provider
pub struct EngineBuilder {
    users: Vec<User>,
    sales: Vec<Sale>,
    failing: Option<ProviderCall>,
    expected_user_lookups: Option<usize>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            sales: Vec::new(),
            failing: None,
            expected_user_lookups: None,
        }
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_sales(mut self, sales: Vec<Sale>) -> Self {
        self.sales = sales;
        self
    }

    /// Make `call` return a backend error
    pub fn failing(mut self, call: ProviderCall) -> Self {
        self.failing = Some(call);
        self
    }

    /// Require exactly `count` user lookups before the mock is dropped
    pub fn expect_user_lookups(mut self, count: usize) -> Self {
        self.expected_user_lookups = Some(count);
        self
    }

    pub fn build(self) -> CommissionEngine<MockDataProvider> {
        let mut provider = MockDataProvider::new();
        let failing = self.failing;
        let users = Arc::new(self.users);
        let sales = Arc::new(self.sales);

        let user_table = Arc::clone(&users);
        let find_user = provider.expect_find_user_by_id().returning(move |id| {
            if failing == Some(ProviderCall::FindUser) {
                return Err(TestHelpers::backend_down());
            }
            Ok(user_table.iter().find(|u| &u.id == id).cloned())
        });
        match self.expected_user_lookups {
            Some(count) => {
                find_user.times(count);
            }
            None => {
                find_user.times(0..);
            }
        }

        let sale_table = Arc::clone(&sales);
        provider.expect_find_sale_by_id().times(0..).returning(move |id| {
            if failing == Some(ProviderCall::FindSale) {
                return Err(TestHelpers::backend_down());
            }
            Ok(sale_table.iter().find(|s| &s.id == id).cloned())
        });

        let sale_table = Arc::clone(&sales);
        provider
            .expect_find_sales_by_user()
            .times(0..)
            .returning(move |user_id, period| {
                if failing == Some(ProviderCall::SalesByUser) {
                    return Err(TestHelpers::backend_down());
                }
                Ok(sale_table
                    .iter()
                    .filter(|s| &s.seller_user_id == user_id)
                    .filter(|s| period.map_or(true, |p| p.contains(s.date)))
                    .cloned()
                    .collect())
            });

        let sale_table = Arc::clone(&sales);
        provider.expect_list_all_sales().times(0..).returning(move || {
            if failing == Some(ProviderCall::ListSales) {
                return Err(TestHelpers::backend_down());
            }
            Ok((*sale_table).clone())
        });

        let user_table = Arc::clone(&users);
        provider
            .expect_find_direct_referrals()
            .times(0..)
            .returning(move |user_id| {
                if failing == Some(ProviderCall::DirectReferrals) {
                    return Err(TestHelpers::backend_down());
                }
                Ok(user_table
                    .iter()
                    .filter(|u| u.referrer_id.as_ref() == Some(user_id))
                    .cloned()
                    .collect())
            });

        CommissionEngine::new(provider)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Assertion and conversion shortcuts
pub struct TestHelpers;

impl TestHelpers {
    pub fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    pub fn backend_down() -> DataProviderError {
        DataProviderError::Unavailable {
            message: "backend down".to_string(),
        }
    }

    /// Assert an error's kind and caller-visible message
    pub fn assert_error(error: &CommissionError, kind: ErrorKind, message: &str) {
        assert_eq!(error.kind(), kind, "unexpected kind for error: {error}");
        assert_eq!(error.to_string(), message);
    }
}
