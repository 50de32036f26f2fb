//! Flat override commission on a seller's own sales in one month

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use shared::{Period, Sale, User, UserId};

use super::rates::{round_currency, PERIOD_OVERRIDE_RATE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCommission {
    pub user_id: UserId,
    pub user_name: String,
    pub commission: Decimal,
    pub sales_count: usize,
    #[serde(serialize_with = "serialize_period")]
    pub period: Period,
}

impl PeriodCommission {
    /// Summarize a user's sales for `period`
    ///
    /// Returns `None` when `sales` is empty; callers treat that as "no sales
    /// found for the specified period".
    pub fn summarize(user: &User, sales: &[Sale], period: Period) -> Option<Self> {
        if sales.is_empty() {
            return None;
        }

        let gross: Decimal = sales.iter().map(|sale| sale.amount).sum();

        Some(Self {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            commission: round_currency(gross * PERIOD_OVERRIDE_RATE),
            sales_count: sales.len(),
            period,
        })
    }
}

fn serialize_period<S: Serializer>(period: &Period, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sale(id: &str, amount: &str) -> Sale {
        Sale::new(id, "user-123", dec(amount), NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
    }

    #[test]
    fn test_ten_percent_of_period_sales() {
        let user = User::new("user-123", "John Doe");
        let period = Period::new(1, 2025).unwrap();
        let sales = vec![sale("sale-1", "1000"), sale("sale-2", "2000")];

        let summary = PeriodCommission::summarize(&user, &sales, period).unwrap();

        assert_eq!(summary.commission, dec("300"));
        assert_eq!(summary.sales_count, 2);
        assert_eq!(summary.user_name, "John Doe");
    }

    #[test]
    fn test_commission_rounds_to_cents() {
        let user = User::new("user-1", "Seller");
        let period = Period::new(3, 2024).unwrap();
        let sales = vec![sale("a", "0.05"), sale("b", "10.00")];

        // 10.05 * 0.10 = 1.005
        let summary = PeriodCommission::summarize(&user, &sales, period).unwrap();
        assert_eq!(summary.commission, dec("1.01"));
    }

    #[test]
    fn test_no_sales_yields_none() {
        let user = User::new("user-1", "Seller");
        let period = Period::new(1, 2025).unwrap();

        assert!(PeriodCommission::summarize(&user, &[], period).is_none());
    }

    #[test]
    fn test_period_serializes_as_month_slash_year() {
        let user = User::new("user-123", "John Doe");
        let period = Period::new(1, 2025).unwrap();
        let summary = PeriodCommission::summarize(&user, &[sale("sale-1", "1000")], period).unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["period"], "1/2025");
        assert_eq!(json["salesCount"], 1);
        assert_eq!(json["userId"], "user-123");
    }
}
