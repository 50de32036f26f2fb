//! Commission rates and currency rounding

use rust_decimal::{Decimal, RoundingStrategy};

/// Level rates: seller, direct sponsor, sponsor's sponsor, and one more level up
pub const LEVEL_RATES: [Decimal; 4] = [
    Decimal::from_parts(60, 0, 0, false, 2),
    Decimal::from_parts(25, 0, 0, false, 2),
    Decimal::from_parts(10, 0, 0, false, 2),
    Decimal::from_parts(5, 0, 0, false, 2),
];

/// Number of participants a single sale can pay
pub const MAX_LEVELS: usize = LEVEL_RATES.len();

/// Flat override paid to a seller on their own sales in a period.
/// Independent of `LEVEL_RATES`.
pub const PERIOD_OVERRIDE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Flat rate paid on each direct referral's sales.
/// Independent of `LEVEL_RATES`.
pub const NETWORK_REFERRAL_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Absolute tolerance when checking a distribution against its sale amount
pub const DISTRIBUTION_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Smallest sale amount accepted by the HTTP API
pub const MIN_SALE_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

const CURRENCY_DECIMALS: u32 = 2;

/// Rate paid at `level`, if the table reaches that far
pub fn rate_for_level(level: usize) -> Option<Decimal> {
    LEVEL_RATES.get(level).copied()
}

/// Round to cents, halves away from zero
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to a whole number, halves away from zero
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
