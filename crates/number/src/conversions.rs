//! Conversions between on-chain integers and arbitrary precision decimals.

use {
    bigdecimal::BigDecimal,
    num::{BigInt, BigUint, bigint::Sign},
    primitive_types::U256,
};

pub fn u256_to_biguint(i: &U256) -> BigUint {
    let mut bytes = [0_u8; 32];
    i.to_big_endian(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}

/// Returns `None` when the value does not fit into 256 bits.
pub fn biguint_to_u256(i: &BigUint) -> Option<U256> {
    let bytes = i.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    Some(U256::from_big_endian(&bytes))
}

pub fn u256_to_big_decimal(u: &U256) -> BigDecimal {
    BigDecimal::new(BigInt::from_biguint(Sign::Plus, u256_to_biguint(u)), 0)
}

/// Converts the integer part of a non-negative decimal into a `U256`. The
/// fractional part is truncated. Returns `None` for negative values or values
/// that overflow.
pub fn big_decimal_to_u256(d: &BigDecimal) -> Option<U256> {
    if d.sign() == Sign::Minus {
        return None;
    }
    let (int, _) = d.with_scale(0).into_bigint_and_exponent();
    biguint_to_u256(&int.to_biguint()?)
}
