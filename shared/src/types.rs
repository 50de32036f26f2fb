//! Core shared types and identifiers

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Identifier of a network participant
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a recorded sale
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(String);

impl SaleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SaleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A participant in the referral network
///
/// `referrer_id` points at the sponsor, forming a single-parent chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub referrer_id: Option<UserId>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            referrer_id: None,
        }
    }

    pub fn referred_by(mut self, referrer: impl Into<String>) -> Self {
        self.referrer_id = Some(UserId::new(referrer));
        self
    }
}

/// A sale owned by exactly one seller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    #[serde(alias = "userId")]
    pub seller_user_id: UserId,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl Sale {
    pub fn new(id: impl Into<String>, seller: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id: SaleId::new(id),
            seller_user_id: UserId::new(seller),
            amount,
            date,
        }
    }
}

/// One-level `referrer -> referred` relationship
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralEdge {
    pub referrer_id: UserId,
    pub referred_id: UserId,
}

/// Calendar month used to filter sales
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    pub const MIN_YEAR: i32 = 2020;
    pub const MAX_YEAR: i32 = 2030;

    /// Build a period, rejecting months outside 1..=12 and years outside 2020..=2030
    pub fn new(month: u32, year: i32) -> SharedResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(SharedError::OutOfRange {
                field: "month".to_string(),
                value: month.to_string(),
                min: "1".to_string(),
                max: "12".to_string(),
            });
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(SharedError::OutOfRange {
                field: "year".to_string(),
                value: year.to_string(),
                min: Self::MIN_YEAR.to_string(),
                max: Self::MAX_YEAR.to_string(),
            });
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Both month and year must match
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
