//! Commission engine service
//!
//! Resolves users and sales through an injected [`DataProvider`] and feeds
//! them to the pure calculations in [`crate::core`]. Every public operation
//! reports unexpected failures under its own generic message while letting
//! validation, not-found and authorization failures through untouched.

use rust_decimal::Decimal;
use shared::{Period, SaleId, SharedError, User, UserId};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::core::rates::MAX_LEVELS;
use crate::core::{
    CallerRole, EarningsAccumulator, LevelDistribution, NetworkCommissions, NetworkEarnings,
    PeriodCommission, ReferralCommission,
};
use crate::error::{CommissionError, CommissionResult, ErrorKind};
use crate::traits::DataProvider;

const PERIOD_COMMISSION_FAILED: &str = "Error calculating commission";
const LEVEL_COMMISSION_FAILED: &str = "Error calculating level commissions";
const NETWORK_COMMISSIONS_FAILED: &str = "Error retrieving network commissions";
const NETWORK_EARNINGS_FAILED: &str = "Error calculating network earnings";

/// Commission engine with dependency injection
pub struct CommissionEngine<D: DataProvider> {
    provider: Arc<D>,
}

impl<D: DataProvider> Clone for CommissionEngine<D> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<D: DataProvider> CommissionEngine<D> {
    pub fn new(provider: D) -> Self {
        Self::with_shared_provider(Arc::new(provider))
    }

    pub fn with_shared_provider(provider: Arc<D>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &D {
        &self.provider
    }

    /// Split `sale_amount` across the seller of `sale_id` and up to three sponsors
    pub async fn distribute_level_commission(
        &self,
        sale_id: &SaleId,
        sale_amount: Decimal,
    ) -> CommissionResult<LevelDistribution> {
        let distribution = self
            .try_distribute(sale_id, sale_amount)
            .await
            .map_err(|e| Self::fail(e, LEVEL_COMMISSION_FAILED))?;

        debug!(
            sale_id = %sale_id,
            levels = distribution.lines.len(),
            total = %distribution.total,
            complete = distribution.verification.is_complete(),
            "Distributed level commission"
        );
        Ok(distribution)
    }

    /// 10% override on a user's own sales in one month
    pub async fn calculate_period_commission(
        &self,
        user_id: &UserId,
        month: u32,
        year: i32,
    ) -> CommissionResult<PeriodCommission> {
        let summary = self
            .try_period_commission(user_id, month, year)
            .await
            .map_err(|e| Self::fail(e, PERIOD_COMMISSION_FAILED))?;

        info!(
            user_id = %user_id,
            period = %summary.period,
            sales = summary.sales_count,
            commission = %summary.commission,
            "Calculated period commission"
        );
        Ok(summary)
    }

    /// 5% of each direct referral's sales, visible to admins and managers only
    pub async fn get_direct_referral_commissions(
        &self,
        user_id: &UserId,
        caller_role: Option<&str>,
    ) -> CommissionResult<NetworkCommissions> {
        let network = self
            .try_direct_referrals(user_id, caller_role)
            .await
            .map_err(|e| Self::fail(e, NETWORK_COMMISSIONS_FAILED))?;

        info!(
            user_id = %user_id,
            referrals = network.lines.len(),
            total = %network.total,
            "Collected direct referral commissions"
        );
        Ok(network)
    }

    /// Everything `user_id` earns across the distributions of all sales
    pub async fn calculate_network_earnings(&self, user_id: &UserId) -> CommissionResult<NetworkEarnings> {
        let earnings = self
            .try_network_earnings(user_id)
            .await
            .map_err(|e| Self::fail(e, NETWORK_EARNINGS_FAILED))?;

        info!(
            user_id = %user_id,
            entries = earnings.earnings_count,
            total = %earnings.total_earnings,
            "Calculated network earnings"
        );
        Ok(earnings)
    }

    async fn try_distribute(&self, sale_id: &SaleId, sale_amount: Decimal) -> CommissionResult<LevelDistribution> {
        if sale_amount <= Decimal::ZERO {
            return Err(SharedError::NotPositive {
                field: "saleAmount".to_string(),
                value: sale_amount.to_string(),
            }
            .into());
        }

        let sale = self
            .provider
            .find_sale_by_id(sale_id)
            .await?
            .ok_or_else(|| CommissionError::not_found("Sale not found"))?;

        let seller = self
            .provider
            .find_user_by_id(&sale.seller_user_id)
            .await?
            .ok_or_else(|| CommissionError::not_found("Seller not found"))?;

        let chain = self.resolve_chain(seller).await?;
        Ok(LevelDistribution::from_chain(sale_id.clone(), sale_amount, &chain))
    }

    /// Walk from the seller up the sponsor chain
    ///
    /// Never yields more than `MAX_LEVELS` users, so a cyclic or overly long
    /// chain cannot keep the walk going. A dangling referrer ends the chain.
    async fn resolve_chain(&self, seller: User) -> CommissionResult<Vec<User>> {
        let mut chain = Vec::with_capacity(MAX_LEVELS);
        let mut current = Some(seller);

        while let Some(user) = current.take() {
            let referrer_id = user.referrer_id.clone();
            chain.push(user);

            if chain.len() == MAX_LEVELS {
                break;
            }

            current = match referrer_id {
                Some(id) => self.provider.find_user_by_id(&id).await?,
                None => None,
            };
        }

        Ok(chain)
    }

    async fn try_period_commission(
        &self,
        user_id: &UserId,
        month: u32,
        year: i32,
    ) -> CommissionResult<PeriodCommission> {
        let period = Period::new(month, year)?;
        let user = self.require_user(user_id).await?;

        let sales = self.provider.find_sales_by_user(user_id, Some(period)).await?;

        PeriodCommission::summarize(&user, &sales, period)
            .ok_or_else(|| CommissionError::not_found("No sales found for the specified period"))
    }

    async fn try_direct_referrals(
        &self,
        user_id: &UserId,
        caller_role: Option<&str>,
    ) -> CommissionResult<NetworkCommissions> {
        if CallerRole::parse(caller_role).is_none() {
            return Err(CommissionError::unauthorized(
                "Insufficient permissions to view network commissions",
            ));
        }

        let user = self.require_user(user_id).await?;
        let referrals = self.provider.find_direct_referrals(user_id).await?;

        let mut lines = Vec::with_capacity(referrals.len());
        for referral in &referrals {
            let sales = self.provider.find_sales_by_user(&referral.id, None).await?;
            if let Some(line) = ReferralCommission::for_referral(referral, &sales) {
                lines.push(line);
            }
        }

        Ok(NetworkCommissions::new(&user, lines))
    }

    async fn try_network_earnings(&self, user_id: &UserId) -> CommissionResult<NetworkEarnings> {
        let user = self.require_user(user_id).await?;
        let sales = self.provider.list_all_sales().await?;

        let mut earnings = EarningsAccumulator::new(user);
        for sale in &sales {
            let distribution = self.distribute_level_commission(&sale.id, sale.amount).await?;
            earnings.record(&distribution);
        }

        Ok(earnings.finish())
    }

    async fn require_user(&self, user_id: &UserId) -> CommissionResult<User> {
        self.provider
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| CommissionError::not_found("User not found"))
    }

    fn fail(error: CommissionError, operation: &str) -> CommissionError {
        let error = error.for_operation(operation);
        match error.kind() {
            ErrorKind::Internal => error!(
                operation = operation,
                reason = error.reason().unwrap_or_default(),
                "Commission operation failed"
            ),
            kind => debug!(operation = operation, ?kind, error = %error, "Commission request rejected"),
        }
        error
    }
}
