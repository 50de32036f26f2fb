//! Direct-referral commissions and network visibility

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Sale, User, UserId};

use super::rates::{round_currency, NETWORK_REFERRAL_RATE};

/// Level reported for every direct referral
const DIRECT_REFERRAL_LEVEL: u8 = 1;

/// Roles allowed to see another user's network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerRole {
    Admin,
    Manager,
}

impl CallerRole {
    /// Parse the caller's role header; only exact `admin` / `manager` qualify
    pub fn parse(role: Option<&str>) -> Option<Self> {
        match role {
            Some("admin") => Some(CallerRole::Admin),
            Some("manager") => Some(CallerRole::Manager),
            _ => None,
        }
    }
}

/// Commission earned on one direct referral's sales
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCommission {
    pub user_id: UserId,
    pub user_name: String,
    pub amount: Decimal,
    pub level: u8,
    pub sales_count: usize,
}

impl ReferralCommission {
    /// 5% of everything `referral` has sold, or `None` if that rounds to zero
    pub fn for_referral(referral: &User, sales: &[Sale]) -> Option<Self> {
        let gross: Decimal = sales.iter().map(|sale| sale.amount).sum();
        let amount = round_currency(gross * NETWORK_REFERRAL_RATE);

        if amount <= Decimal::ZERO {
            return None;
        }

        Some(Self {
            user_id: referral.id.clone(),
            user_name: referral.name.clone(),
            amount,
            level: DIRECT_REFERRAL_LEVEL,
            sales_count: sales.len(),
        })
    }
}

/// Referral commissions across a user's direct network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCommissions {
    pub network_user_id: UserId,
    pub network_user_name: String,
    #[serde(rename = "commissions")]
    pub lines: Vec<ReferralCommission>,
    #[serde(rename = "totalNetworkCommission")]
    pub total: Decimal,
}

impl NetworkCommissions {
    /// `total` is the plain sum of the already-rounded lines
    pub fn new(user: &User, lines: Vec<ReferralCommission>) -> Self {
        let total: Decimal = lines.iter().map(|line| line.amount).sum();
        Self {
            network_user_id: user.id.clone(),
            network_user_name: user.name.clone(),
            lines,
            total,
        }
    }
}
