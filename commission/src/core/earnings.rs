//! Network earnings: what one user collects across every sale's distribution

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{SaleId, User, UserId};

use super::distribution::LevelDistribution;
use super::rates::round_currency;

/// One sale that paid the user something
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsEntry {
    pub sale_id: SaleId,
    pub sale_amount: Decimal,
    pub level: u8,
    pub commission: Decimal,
    #[serde(rename = "seller")]
    pub seller_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEarnings {
    pub user_id: UserId,
    pub user_name: String,
    pub total_earnings: Decimal,
    pub earnings_count: usize,
    pub breakdown: Vec<EarningsEntry>,
}

/// Folds per-sale distributions into a [`NetworkEarnings`] report
#[derive(Debug)]
pub struct EarningsAccumulator {
    user: User,
    total: Decimal,
    breakdown: Vec<EarningsEntry>,
}

impl EarningsAccumulator {
    pub fn new(user: User) -> Self {
        Self {
            user,
            total: Decimal::ZERO,
            breakdown: Vec::new(),
        }
    }

    /// Record the user's share of `distribution`, if they appear in it
    ///
    /// Only the first line naming the user counts.
    pub fn record(&mut self, distribution: &LevelDistribution) -> bool {
        let Some(line) = distribution.line_for(&self.user.id) else {
            return false;
        };

        let seller_name = distribution
            .seller_line()
            .map(|seller| seller.user_name.clone())
            .unwrap_or_default();

        self.total += line.amount;
        self.breakdown.push(EarningsEntry {
            sale_id: distribution.sale_id.clone(),
            sale_amount: distribution.sale_amount,
            level: line.level,
            commission: line.amount,
            seller_name,
        });
        true
    }

    pub fn finish(self) -> NetworkEarnings {
        NetworkEarnings {
            user_id: self.user.id,
            user_name: self.user.name,
            total_earnings: round_currency(self.total),
            earnings_count: self.breakdown.len(),
            breakdown: self.breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn demo_chain() -> Vec<User> {
        vec![
            User::new("user-999", "Alice Brown").referred_by("user-789"),
            User::new("user-789", "Bob Johnson").referred_by("user-456"),
            User::new("user-456", "Jane Smith").referred_by("user-123"),
            User::new("user-123", "John Doe"),
        ]
    }

    #[test]
    fn test_accumulates_matching_lines() {
        let chain = demo_chain();
        let first = LevelDistribution::from_chain(SaleId::from("sale-5"), dec("1.00"), &chain);
        let second = LevelDistribution::from_chain(SaleId::from("sale-4"), dec("1500"), &chain[1..]);

        let mut acc = EarningsAccumulator::new(chain[3].clone());
        assert!(acc.record(&first));
        assert!(acc.record(&second));
        let earnings = acc.finish();

        // 0.05 at level 3 + 1500 * 0.10 at level 2
        assert_eq!(earnings.total_earnings, dec("150.05"));
        assert_eq!(earnings.earnings_count, 2);
        assert_eq!(earnings.breakdown[0].level, 3);
        assert_eq!(earnings.breakdown[0].seller_name, "Alice Brown");
        assert_eq!(earnings.breakdown[1].level, 2);
        assert_eq!(earnings.breakdown[1].seller_name, "Bob Johnson");
    }

    #[test]
    fn test_skips_distributions_without_user() {
        let chain = demo_chain();
        let dist = LevelDistribution::from_chain(SaleId::from("sale-5"), dec("1.00"), &chain[..1]);

        let mut acc = EarningsAccumulator::new(chain[3].clone());
        assert!(!acc.record(&dist));

        let earnings = acc.finish();
        assert_eq!(earnings.total_earnings, Decimal::ZERO);
        assert!(earnings.breakdown.is_empty());
    }

    #[test]
    fn test_first_occurrence_wins_in_cyclic_chain() {
        let a = User::new("a", "A").referred_by("b");
        let b = User::new("b", "B").referred_by("a");
        let cyclic = vec![a.clone(), b.clone(), a.clone(), b];
        let dist = LevelDistribution::from_chain(SaleId::from("s"), dec("100"), &cyclic);

        let mut acc = EarningsAccumulator::new(a);
        acc.record(&dist);
        let earnings = acc.finish();

        assert_eq!(earnings.earnings_count, 1);
        assert_eq!(earnings.breakdown[0].level, 0);
        assert_eq!(earnings.total_earnings, dec("60"));
    }
}
