//! Conversions between raw on-chain token amounts (integers in the token's
//! smallest unit) and human readable display amounts.
//!
//! Nothing in here returns an error. Amounts that cannot be parsed are treated
//! as not loaded yet and collapse to zero, which is what the views render in
//! place of missing data.

use {
    crate::conversions::{big_decimal_to_u256, u256_to_big_decimal},
    bigdecimal::BigDecimal,
    num::{BigInt, Zero, bigint::Sign},
    primitive_types::U256,
    std::str::FromStr,
};

/// Parses a user or store supplied decimal string. Empty strings and anything
/// that isn't a finite decimal number (e.g. `"NaN"`) yield `None`.
pub fn parse_decimal(value: &str) -> Option<BigDecimal> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    BigDecimal::from_str(value).ok()
}

/// `10^-exponent` as an exact decimal.
fn scale_down(exponent: u32) -> BigDecimal {
    BigDecimal::new(BigInt::from(1), i64::from(exponent))
}

/// Divides an integer amount by `10^decimals` without losing precision.
pub fn to_display_units(raw: &str, decimals: u32) -> BigDecimal {
    match BigInt::from_str(raw.trim()) {
        Ok(int) => BigDecimal::new(int, i64::from(decimals)).normalized(),
        Err(_) => BigDecimal::zero(),
    }
}

pub fn from_base_units(amount: U256, decimals: u32) -> BigDecimal {
    (u256_to_big_decimal(&amount) * scale_down(decimals)).normalized()
}

/// Inverse of [`from_base_units`]. Digits below the token's base unit are
/// dropped.
pub fn to_base_units(amount: &BigDecimal, decimals: u32) -> Option<U256> {
    if amount.sign() == Sign::Minus {
        return None;
    }
    let order = order_of_magnitude(amount).saturating_add(i64::from(decimals));
    if order > U256_DIGITS {
        return None;
    }
    if order < 0 {
        return Some(U256::zero());
    }
    let scale_up = BigDecimal::new(BigInt::from(1), -i64::from(decimals));
    big_decimal_to_u256(&(amount * scale_up))
}

/// Decimal digits of `U256::MAX`.
const U256_DIGITS: i64 = 78;

/// Percentages this small floor every `U256` amount to zero.
const MIN_PERCENT_ORDER: i64 = -U256_DIGITS - 2;

/// Position of the most significant digit: a non-zero `value` lies in
/// `[10^(order-1), 10^order)`. Only looks at digit count and scale, so it
/// stays cheap for inputs like `1e-200000000`.
fn order_of_magnitude(value: &BigDecimal) -> i64 {
    let (_, scale) = value.as_bigint_and_exponent();
    i64::try_from(value.digits())
        .unwrap_or(i64::MAX)
        .saturating_sub(scale)
}

/// Clamps a percentage into `[0, 100]`. Percentages too small to move any
/// amount are clamped to zero.
pub fn clamp_percent(percent: &BigDecimal) -> BigDecimal {
    let hundred = BigDecimal::from(100);
    if percent.sign() != Sign::Plus {
        return BigDecimal::zero();
    }
    // Compare magnitudes first; comparing the values directly rescales both
    // to a common scale.
    let order = order_of_magnitude(percent);
    if order > 3 {
        hundred
    } else if order < MIN_PERCENT_ORDER {
        BigDecimal::zero()
    } else if *percent > hundred {
        hundred
    } else {
        percent.clone()
    }
}

/// `floor(balance * percent / 100)` in the token's base unit.
///
/// `balance` is an integer amount in base units. The result never exceeds
/// `balance`: rounding is always towards zero so that a transaction built from
/// it cannot fail on insufficient balance. Returns zero when either input is
/// zero or not a number.
pub fn percent_of_balance(balance: &str, percent: &str) -> BigDecimal {
    let (Ok(balance), Some(percent)) = (BigInt::from_str(balance.trim()), parse_decimal(percent))
    else {
        return BigDecimal::zero();
    };
    floor_percent(&BigDecimal::from(balance), &percent)
}

fn floor_percent(balance: &BigDecimal, percent: &BigDecimal) -> BigDecimal {
    let percent = clamp_percent(percent);
    if balance.sign() != Sign::Plus || percent.is_zero() {
        return BigDecimal::zero();
    }
    (balance * percent * scale_down(2)).with_scale(0)
}

/// Typed variant of [`percent_of_balance`] for amounts read from chain.
pub fn percent_of_amount(balance: U256, percent: &BigDecimal) -> U256 {
    let amount = floor_percent(&u256_to_big_decimal(&balance), percent);
    big_decimal_to_u256(&amount).unwrap_or_default()
}

/// Rounds a non-negative decimal half-up to an integer.
pub fn round_half_up(value: &BigDecimal) -> BigDecimal {
    let half = BigDecimal::new(BigInt::from(5), 1);
    if value.sign() == Sign::Minus {
        return -round_half_up(&(-value.clone()));
    }
    (value + half).with_scale(0)
}

/// Rounds a decimal half-up to `digits` fractional digits.
pub fn round_half_up_to(value: &BigDecimal, digits: u32) -> BigDecimal {
    let shift = BigDecimal::new(BigInt::from(1), -i64::from(digits));
    round_half_up(&(value * shift)) * scale_down(digits)
}
