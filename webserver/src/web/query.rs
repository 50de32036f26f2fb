//! Query-string DTOs and their validation
//!
//! Every parameter arrives as an optional string so a missing or malformed
//! value is reported in the API's own error format instead of as an
//! extractor rejection.

use axum::extract::rejection::QueryRejection;
use commission::core::rates::MIN_SALE_AMOUNT;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{Period, SaleId, SharedError, SharedResult, UserId};
use std::str::FromStr;

/// `GET /commission/calculate?userId&month&year`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateQuery {
    pub user_id: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

/// `GET /commission/level-commission?saleId&saleAmount`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelCommissionQuery {
    pub sale_id: Option<String>,
    pub sale_amount: Option<String>,
}

impl CalculateQuery {
    pub fn validate(&self) -> SharedResult<(UserId, Period)> {
        let user_id = UserId::new(required("userId", &self.user_id)?);

        let month = parse_integer("month", required("month", &self.month)?)?;
        let year = parse_integer("year", required("year", &self.year)?)?;

        let month = u32::try_from(month).map_err(|_| out_of_range("month", month, 1, 12))?;
        let year = i32::try_from(year)
            .map_err(|_| out_of_range("year", year, Period::MIN_YEAR.into(), Period::MAX_YEAR.into()))?;

        Ok((user_id, Period::new(month, year)?))
    }
}

impl LevelCommissionQuery {
    pub fn validate(&self) -> SharedResult<(SaleId, Decimal)> {
        let sale_id = SaleId::new(required("saleId", &self.sale_id)?);

        let raw = required("saleAmount", &self.sale_amount)?;
        let sale_amount = Decimal::from_str(raw).map_err(|_| invalid("saleAmount", raw, "number"))?;
        if sale_amount < MIN_SALE_AMOUNT {
            return Err(SharedError::BelowMinimum {
                field: "saleAmount".to_string(),
                value: sale_amount.to_string(),
                min: MIN_SALE_AMOUNT.to_string(),
            });
        }

        Ok((sale_id, sale_amount))
    }
}

/// Query strings serde cannot map onto a DTO at all, e.g. a repeated key
pub fn rejected(rejection: QueryRejection) -> SharedError {
    invalid("query", &rejection.body_text(), "query string")
}

fn required<'a>(field: &str, value: &'a Option<String>) -> SharedResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SharedError::MissingField {
            field: field.to_string(),
        }),
    }
}

// Whole numbers only; "3.5" and "3abc" are rejected
fn parse_integer(field: &str, raw: &str) -> SharedResult<i64> {
    raw.parse::<i64>().map_err(|_| invalid(field, raw, "integer"))
}

fn invalid(field: &str, raw: &str, expected: &str) -> SharedError {
    SharedError::InvalidFormat {
        field: field.to_string(),
        value: raw.to_string(),
        expected: expected.to_string(),
    }
}

fn out_of_range(field: &str, value: i64, min: i64, max: i64) -> SharedError {
    SharedError::OutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        min: min.to_string(),
        max: max.to_string(),
    }
}
