use {
    crate::domain::{pair::Reserves, token::Token},
    bigdecimal::BigDecimal,
    num::Zero,
    primitive_types::U256,
    serde::Serialize,
};

/// Digits kept when displaying a price ratio.
const PRICE_DECIMALS: i64 = 6;

/// `numerator / denominator`, truncated for display. Zero when the
/// denominator is zero (i.e. an empty or not yet loaded pool).
pub fn price_ratio(numerator: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
    if denominator.is_zero() {
        return BigDecimal::zero();
    }
    (numerator / denominator).with_scale(PRICE_DECIMALS).normalized()
}

/// Spot prices of a pool in both directions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Prices {
    /// How much of `b` one `a` is worth.
    pub b_per_a: BigDecimal,
    /// How much of `a` one `b` is worth.
    pub a_per_b: BigDecimal,
}

impl Prices {
    pub fn new(reserves: &Reserves, a: &Token, b: &Token) -> Self {
        let reserve_a = number::units::from_base_units(reserves.of(&a.symbol), a.decimals());
        let reserve_b = number::units::from_base_units(reserves.of(&b.symbol), b.decimals());
        Self {
            b_per_a: price_ratio(&reserve_b, &reserve_a),
            a_per_b: price_ratio(&reserve_a, &reserve_b),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.b_per_a.is_zero()
    }
}

/// Decimals the LP token of a pair is displayed with: the average of both
/// token decimals, rounded down.
pub fn lp_decimals(a: &Token, b: &Token) -> u32 {
    (a.decimals() + b.decimals()) / 2
}

/// LP position of the user in display units.
pub fn lp_position(balance: U256, a: &Token, b: &Token) -> BigDecimal {
    number::units::from_base_units(balance, lp_decimals(a, b))
}

/// Message shown in place of the prices when the pool has none.
pub fn empty_pool_message(connected: bool) -> &'static str {
    if connected {
        "No liquidity available for selected pool"
    } else {
        "Connect your wallet first"
    }
}
