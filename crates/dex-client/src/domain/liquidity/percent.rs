use {
    bigdecimal::BigDecimal,
    num::Zero,
    primitive_types::U256,
    serde::Serialize,
};

/// Shortcut buttons next to the percentage input. The last one is "Max".
pub const SHORTCUTS: [u8; 4] = [25, 50, 75, 100];

/// How much of the LP position to remove, as typed by the user.
///
/// The raw input is kept for display; the value is clamped into `[0, 100]`
/// and an empty or unparsable input counts as `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LiquidityPercent {
    input: String,
    value: BigDecimal,
}

impl LiquidityPercent {
    pub fn from_input(input: impl Into<String>) -> Self {
        let input = input.into();
        let value = number::units::parse_decimal(&input)
            .map(|value| number::units::clamp_percent(&value))
            .unwrap_or_else(BigDecimal::zero);
        Self { input, value }
    }

    pub fn shortcut(percent: u8) -> Self {
        Self::from_input(percent.to_string())
    }

    pub fn max() -> Self {
        Self::shortcut(100)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The share of `balance` this percentage stands for, rounded down.
    pub fn of(&self, balance: U256) -> U256 {
        number::units::percent_of_amount(balance, &self.value)
    }
}
