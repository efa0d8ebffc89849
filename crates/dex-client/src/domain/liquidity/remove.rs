//! Status and actions of the remove liquidity form.

use {
    super::percent::LiquidityPercent,
    crate::domain::{
        pair::{Pair, PoolFactMap},
        token::{Symbol, Token},
        transaction::{Kind, Transaction},
    },
    number::serialization::DecimalU256,
    primitive_types::U256,
    serde::Serialize,
    serde_with::serde_as,
};

/// Transactions started from this form.
pub const TRACKED: [Kind; 2] = [Kind::Remove, Kind::LpTokenApprove];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
pub enum Status {
    #[strum(serialize = "Connect Wallet")]
    ConnectWallet,
    #[strum(serialize = "Please wait...")]
    PleaseWait,
    #[strum(serialize = "No liquidity to remove")]
    NoLiquidity,
    #[strum(serialize = "Pending Transaction...")]
    PendingTransaction,
    #[strum(serialize = "Approve LP token")]
    ApproveLpToken,
    #[strum(serialize = "Remove Liquidity")]
    RemoveLiquidity,
}

/// Everything the remove form's button depends on.
#[derive(Clone, Copy, Debug)]
pub struct Inputs<'a> {
    pub connected: bool,
    /// Account data is loading.
    pub loading: bool,
    /// A pool fact fetch is in flight.
    pub dex_loading: bool,
    /// LP balance of the selected pair, already resolved in either order.
    pub lp_balance: U256,
    pub approved: bool,
    pub percent: &'a LiquidityPercent,
    pub transaction: &'a Transaction,
}

/// Button label, by priority.
pub fn status(inputs: &Inputs) -> Status {
    if !inputs.connected {
        Status::ConnectWallet
    } else if inputs.loading {
        Status::PleaseWait
    } else if inputs.lp_balance.is_zero() {
        Status::NoLiquidity
    } else if inputs.transaction.is_pending(&TRACKED) {
        Status::PendingTransaction
    } else if !inputs.approved {
        Status::ApproveLpToken
    } else {
        Status::RemoveLiquidity
    }
}

/// Whether the button is disabled. This is computed independently of the
/// label: connecting a wallet is always possible, and a pending transaction
/// alone does not disable the button.
pub fn disabled(inputs: &Inputs) -> bool {
    if !inputs.connected {
        return false;
    }
    inputs.loading || inputs.lp_balance.is_zero() || inputs.percent.is_zero()
}

/// What clicking the button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Connect,
    /// Pool data is still loading; only show the confirmation dialog.
    ShowDialog,
    /// Open the dialog and request an LP token allowance.
    Approve,
    /// Open the dialog and submit the removal.
    Remove,
}

pub fn action(inputs: &Inputs) -> Action {
    if !inputs.connected {
        Action::Connect
    } else if inputs.dex_loading {
        Action::ShowDialog
    } else if !inputs.approved {
        Action::Approve
    } else {
        Action::Remove
    }
}

/// Note under the percentage input telling the user what is missing.
pub fn hint(inputs: &Inputs) -> Option<&'static str> {
    (inputs.dex_loading
        || !inputs.approved
        || inputs.lp_balance.is_zero()
        || inputs.percent.is_zero())
    .then_some("* Choose your amount of first to remove liquidity.")
}

/// Which router entry point a removal goes through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// One side is the chain's native token which gets unwrapped.
    Native { native: Symbol, token: Symbol },
    Tokens { a: Symbol, b: Symbol },
}

/// A fully specified removal, ready to be handed to the contract layer.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Removal {
    #[serde(flatten)]
    pub route: Route,
    #[serde_as(as = "DecimalU256")]
    pub lp_amount: U256,
}

/// Local state of the remove liquidity form.
#[derive(Clone, Debug, Default)]
pub struct Form {
    pub token_a: Option<Token>,
    pub token_b: Option<Token>,
    pub percent: LiquidityPercent,
}

impl Form {
    /// Selecting a token resets the percentage since the position changed.
    pub fn select_a(&mut self, token: Token) {
        self.token_a = Some(token);
        self.percent = LiquidityPercent::default();
    }

    pub fn select_b(&mut self, token: Token) {
        self.token_b = Some(token);
        self.percent = LiquidityPercent::default();
    }

    pub fn set_percent(&mut self, input: impl Into<String>) {
        self.percent = LiquidityPercent::from_input(input);
    }

    pub fn pair(&self) -> Option<Pair> {
        Pair::try_new(self.token_a.clone()?, self.token_b.clone()?).ok()
    }

    /// LP balance of the selected pair, zero until loaded.
    pub fn lp_balance(&self, pools: &PoolFactMap) -> U256 {
        match (&self.token_a, &self.token_b) {
            (Some(a), Some(b)) => pools.lp_balance(&a.symbol, &b.symbol),
            _ => U256::zero(),
        }
    }

    pub fn approved(&self, pools: &PoolFactMap) -> bool {
        match (&self.token_a, &self.token_b) {
            (Some(a), Some(b)) => pools.approved(&a.symbol, &b.symbol),
            _ => false,
        }
    }

    /// The removal the current inputs describe. `None` if the pair is
    /// incomplete or nothing would be removed.
    pub fn removal(&self, pools: &PoolFactMap, native: &Symbol) -> Option<Removal> {
        let pair = self.pair()?;
        let lp_amount = self
            .percent
            .of(pools.lp_balance(&pair.a.symbol, &pair.b.symbol));
        if lp_amount.is_zero() {
            return None;
        }
        let route = match pair.split_native(native) {
            Some((native, token)) => Route::Native {
                native: native.symbol.clone(),
                token: token.symbol.clone(),
            },
            None => Route::Tokens {
                a: pair.a.symbol,
                b: pair.b.symbol,
            },
        };
        Some(Removal { route, lp_amount })
    }
}
