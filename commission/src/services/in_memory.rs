//! In-memory data provider
//!
//! Holds a fixed [`Dataset`] of users and sales. Referral edges are derived
//! from each user's `referrer_id` when the provider is built. Datasets can be
//! the built-in demo network or loaded from a JSON file:
//!
//! ```json
//! {
//!   "users": [{ "id": "user-123", "name": "John Doe", "referrerId": null }],
//!   "sales": [{ "id": "sale-1", "sellerUserId": "user-123", "amount": 1000, "date": "2025-01-15" }]
//! }
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{Period, ReferralEdge, Sale, SaleId, User, UserId};
use std::path::Path;
use tracing::info;

use crate::error::{DataProviderError, DataResult};
use crate::traits::DataProvider;

/// Users and sales served by [`InMemoryDataProvider`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub sales: Vec<Sale>,
}

impl Dataset {
    /// Four-user chain with five January 2025 sales
    ///
    /// John Doe sponsors Jane Smith, who sponsors Bob Johnson, who sponsors
    /// Alice Brown.
    pub fn demo() -> Self {
        let users = vec![
            User::new("user-123", "John Doe"),
            User::new("user-456", "Jane Smith").referred_by("user-123"),
            User::new("user-789", "Bob Johnson").referred_by("user-456"),
            User::new("user-999", "Alice Brown").referred_by("user-789"),
        ];

        let sales = vec![
            Sale::new("sale-1", "user-123", Decimal::from(1000), january_2025(15)),
            Sale::new("sale-2", "user-123", Decimal::from(2000), january_2025(20)),
            Sale::new("sale-3", "user-456", Decimal::from(500), january_2025(10)),
            Sale::new("sale-4", "user-789", Decimal::from(1500), january_2025(25)),
            Sale::new("sale-5", "user-999", Decimal::new(100, 2), january_2025(28)),
        ];

        Self { users, sales }
    }

    pub fn from_json_str(json: &str) -> DataResult<Self> {
        let load_failed = |message: String| DataProviderError::LoadFailed {
            path: "<inline>".to_string(),
            message,
        };

        let dataset: Dataset = serde_json::from_str(json).map_err(|e| load_failed(e.to_string()))?;
        dataset.check_sale_amounts().map_err(load_failed)?;
        Ok(dataset)
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let load_failed = |message: String| DataProviderError::LoadFailed {
            path: path.display().to_string(),
            message,
        };

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| load_failed(e.to_string()))?;
        let dataset: Dataset = serde_json::from_str(&contents).map_err(|e| load_failed(e.to_string()))?;
        dataset.check_sale_amounts().map_err(load_failed)?;

        info!(
            path = %path.display(),
            users = dataset.users.len(),
            sales = dataset.sales.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Every sale must carry a positive amount
    fn check_sale_amounts(&self) -> Result<(), String> {
        match self.sales.iter().find(|sale| sale.amount <= Decimal::ZERO) {
            Some(sale) => Err(format!(
                "sale {} has non-positive amount {}",
                sale.id, sale.amount
            )),
            None => Ok(()),
        }
    }

    /// `referrer -> referred` edges in user order
    pub fn referral_edges(&self) -> Vec<ReferralEdge> {
        self.users
            .iter()
            .filter_map(|user| {
                user.referrer_id.as_ref().map(|referrer| ReferralEdge {
                    referrer_id: referrer.clone(),
                    referred_id: user.id.clone(),
                })
            })
            .collect()
    }
}

fn january_2025(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).expect("demo sale days fall within January")
}

/// Read-only provider over an in-memory [`Dataset`]
#[derive(Debug, Clone)]
pub struct InMemoryDataProvider {
    users: Vec<User>,
    sales: Vec<Sale>,
    referrals: Vec<ReferralEdge>,
}

impl InMemoryDataProvider {
    pub fn new(dataset: Dataset) -> Self {
        let referrals = dataset.referral_edges();
        Self {
            users: dataset.users,
            sales: dataset.sales,
            referrals,
        }
    }

    pub fn demo() -> Self {
        Self::new(Dataset::demo())
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn sale_count(&self) -> usize {
        self.sales.len()
    }

    pub fn referrals(&self) -> &[ReferralEdge] {
        &self.referrals
    }

    fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }
}

#[async_trait::async_trait]
impl DataProvider for InMemoryDataProvider {
    async fn find_user_by_id(&self, id: &UserId) -> DataResult<Option<User>> {
        Ok(self.user(id).cloned())
    }

    async fn find_sale_by_id(&self, id: &SaleId) -> DataResult<Option<Sale>> {
        Ok(self.sales.iter().find(|sale| &sale.id == id).cloned())
    }

    async fn find_sales_by_user(&self, user_id: &UserId, period: Option<Period>) -> DataResult<Vec<Sale>> {
        Ok(self
            .sales
            .iter()
            .filter(|sale| &sale.seller_user_id == user_id)
            .filter(|sale| period.map_or(true, |period| period.contains(sale.date)))
            .cloned()
            .collect())
    }

    async fn list_all_sales(&self) -> DataResult<Vec<Sale>> {
        Ok(self.sales.clone())
    }

    async fn find_direct_referrals(&self, user_id: &UserId) -> DataResult<Vec<User>> {
        Ok(self
            .referrals
            .iter()
            .filter(|edge| &edge.referrer_id == user_id)
            .filter_map(|edge| self.user(&edge.referred_id).cloned())
            .collect())
    }
}
