//! Per-sale level distribution
//!
//! A sale is split across the seller (level 0) and the sponsors above them,
//! one rate per level. Each line is rounded to cents on its own, so the total
//! can drift from `sale_amount * sum(rates)` by up to a cent per level.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use shared::{SaleId, User, UserId};
use std::fmt;

use super::rates::{round_currency, round_whole, DISTRIBUTION_TOLERANCE, LEVEL_RATES};

/// One participant's share of a sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionLine {
    pub level: u8,
    pub user_id: UserId,
    pub user_name: String,
    #[serde(serialize_with = "serialize_rate")]
    pub rate: Decimal,
    #[serde(rename = "commission")]
    pub amount: Decimal,
}

impl CommissionLine {
    fn new(level: usize, rate: Decimal, user: &User, sale_amount: Decimal) -> Self {
        Self {
            level: level as u8,
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            rate,
            amount: round_currency(sale_amount * rate),
        }
    }
}

fn serialize_rate<S: Serializer>(rate: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{}%", (*rate * Decimal::ONE_HUNDRED).normalize()))
}

/// Whether a distribution paid out the whole sale
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Complete,
    Partial { percent_distributed: Decimal },
}

impl Verification {
    /// Compare a rounded total against the sale amount
    ///
    /// `sale_amount` must be positive.
    pub fn evaluate(total: Decimal, sale_amount: Decimal) -> Self {
        if (sale_amount - total).abs() < DISTRIBUTION_TOLERANCE {
            Verification::Complete
        } else {
            Verification::Partial {
                percent_distributed: round_whole(total / sale_amount * Decimal::ONE_HUNDRED),
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Verification::Complete)
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::Complete => f.write_str("Complete commission distribution"),
            Verification::Partial { percent_distributed } => {
                write!(f, "Partial distribution - {percent_distributed}% distributed")
            }
        }
    }
}

impl Serialize for Verification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Commission breakdown of a single sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDistribution {
    pub sale_id: SaleId,
    pub sale_amount: Decimal,
    #[serde(rename = "commissions")]
    pub lines: Vec<CommissionLine>,
    #[serde(rename = "totalCommissions")]
    pub total: Decimal,
    pub verification: Verification,
}

impl LevelDistribution {
    /// Distribute `sale_amount` over a resolved chain
    ///
    /// `chain[0]` is the seller, each following entry the sponsor of the one
    /// before. Entries past the end of the rate table are ignored.
    pub fn from_chain(sale_id: SaleId, sale_amount: Decimal, chain: &[User]) -> Self {
        let lines: Vec<CommissionLine> = LEVEL_RATES
            .iter()
            .zip(chain)
            .enumerate()
            .map(|(level, (rate, user))| CommissionLine::new(level, *rate, user, sale_amount))
            .collect();

        let total = round_currency(lines.iter().map(|line| line.amount).sum());
        let verification = Verification::evaluate(total, sale_amount);

        Self {
            sale_id,
            sale_amount,
            lines,
            total,
            verification,
        }
    }

    /// First line paying `user_id`, if any
    pub fn line_for(&self, user_id: &UserId) -> Option<&CommissionLine> {
        self.lines.iter().find(|line| &line.user_id == user_id)
    }

    /// The seller's line (level 0)
    pub fn seller_line(&self) -> Option<&CommissionLine> {
        self.lines.first()
    }
}
