//! Trait definitions with mockall annotations for testing
//!
//! The engine only reads users, sales and referral edges. Any storage backend
//! that answers these queries can stand in for the in-memory dataset.

use shared::{Period, Sale, SaleId, User, UserId};

use crate::error::DataResult;

/// Read-only query contract over users, sales and referral edges
///
/// Lookups that match nothing return `None` or an empty list, never an error.
/// Errors are reserved for backend failures.
#[mockall::automock]
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    /// Look up a single user
    async fn find_user_by_id(&self, id: &UserId) -> DataResult<Option<User>>;

    /// Look up a single sale
    async fn find_sale_by_id(&self, id: &SaleId) -> DataResult<Option<Sale>>;

    /// Sales owned by `user_id`
    ///
    /// # Parameters
    /// - `period`: when set, the sale date must fall in that month and year;
    ///   `None` applies no date filter
    async fn find_sales_by_user(&self, user_id: &UserId, period: Option<Period>) -> DataResult<Vec<Sale>>;

    /// Every sale known to the provider
    async fn list_all_sales(&self) -> DataResult<Vec<Sale>>;

    /// Users directly referred by `user_id` (one level only)
    async fn find_direct_referrals(&self, user_id: &UserId) -> DataResult<Vec<User>>;
}
