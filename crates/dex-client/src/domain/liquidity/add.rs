//! Status of the add liquidity form.

use {
    crate::domain::token::Token,
    bigdecimal::BigDecimal,
    num::Zero,
    serde::Serialize,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, strum::Display)]
pub enum Status {
    #[strum(serialize = "Invalid pair")]
    InvalidPair,
    #[strum(serialize = "Enter amounts")]
    EnterAmounts,
    #[default]
    #[strum(serialize = "Select both tokens")]
    SelectBothTokens,
    #[strum(serialize = "Add liquidity")]
    AddLiquidity,
}

impl Status {
    pub fn disabled(self) -> bool {
        self != Self::AddLiquidity
    }
}

/// One side of the form.
#[derive(Clone, Copy, Debug)]
pub struct Side<'a> {
    pub token: Option<&'a Token>,
    pub amount: &'a str,
}

impl Side<'_> {
    fn has_amount(&self) -> bool {
        !self.amount.trim().is_empty()
    }

    fn positive_amount(&self) -> bool {
        number::units::parse_decimal(self.amount).is_some_and(|amount| amount > BigDecimal::zero())
    }
}

/// Derives the button status. Rules are checked in order and the first match
/// wins. When none matches the `previous` status is kept, so the button does
/// not flicker through intermediate states while the user is typing.
pub fn status(previous: Status, a: Side, b: Side) -> Status {
    if a.token.zip(b.token).is_some_and(|(ta, tb)| ta.symbol == tb.symbol) {
        return Status::InvalidPair;
    }
    if (a.token.is_some() && !a.has_amount()) || (b.token.is_some() && !b.has_amount()) {
        return Status::EnterAmounts;
    }
    if a.token.is_none() || b.token.is_none() {
        return Status::SelectBothTokens;
    }
    if a.positive_amount() && b.positive_amount() {
        return Status::AddLiquidity;
    }
    previous
}

/// Local state of the add liquidity form. Every edit re-derives the status
/// from the edited values.
#[derive(Clone, Debug, Default)]
pub struct Form {
    pub token_a: Option<Token>,
    pub token_b: Option<Token>,
    pub amount_a: String,
    pub amount_b: String,
    status: Status,
}

impl Form {
    /// A form with `default_token` preselected on the first side, which is how
    /// the form starts out on every network (the native token).
    pub fn new(default_token: Option<Token>) -> Self {
        Self {
            token_a: default_token,
            ..Default::default()
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_amount_a(&mut self, amount: impl Into<String>) {
        self.amount_a = amount.into();
        self.update();
    }

    pub fn set_amount_b(&mut self, amount: impl Into<String>) {
        self.amount_b = amount.into();
        self.update();
    }

    pub fn select_a(&mut self, token: Token) {
        self.token_a = Some(token);
        self.update();
    }

    pub fn select_b(&mut self, token: Token) {
        self.token_b = Some(token);
        self.update();
    }

    fn update(&mut self) {
        self.status = status(
            self.status,
            Side {
                token: self.token_a.as_ref(),
                amount: &self.amount_a,
            },
            Side {
                token: self.token_b.as_ref(),
                amount: &self.amount_b,
            },
        );
        tracing::trace!(status = %self.status, "add liquidity status");
    }
}
