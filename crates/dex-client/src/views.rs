//! Serializable views printed by the binary.

use {
    crate::{
        domain::{
            PairKey,
            Symbol,
            Token,
            analytics::{self, Filter},
            farm,
            liquidity::{LiquidityPercent, Prices, add, position, remove},
            transaction::ConfirmationDialog,
        },
        infra::{config::Chain, store::AppState},
    },
    bigdecimal::BigDecimal,
    chrono::{DateTime, Utc},
    serde::Serialize,
};

#[derive(Debug, Serialize)]
pub struct AddLiquidity {
    pub token_a: Option<Symbol>,
    pub token_b: Option<Symbol>,
    pub status: add::Status,
    pub label: String,
    pub disabled: bool,
}

impl AddLiquidity {
    pub fn new(form: &add::Form) -> Self {
        let status = form.status();
        Self {
            token_a: form.token_a.as_ref().map(|token| token.symbol.clone()),
            token_b: form.token_b.as_ref().map(|token| token.symbol.clone()),
            status,
            label: status.to_string(),
            disabled: status.disabled(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PoolPrices {
    Prices(Prices),
    Empty { message: &'static str },
}

#[derive(Debug, Serialize)]
pub struct RemoveLiquidity {
    pub pair: PairKey,
    pub status: remove::Status,
    pub label: String,
    pub disabled: bool,
    pub action: remove::Action,
    pub hint: Option<&'static str>,
    pub percent: LiquidityPercent,
    pub lp_position: BigDecimal,
    pub prices: PoolPrices,
    pub removal: Option<remove::Removal>,
    pub dialog_open: bool,
    /// Why the last transaction failed, once it has.
    pub failure: Option<String>,
}

impl RemoveLiquidity {
    pub fn new(chain: &Chain, state: &AppState, a: Token, b: Token, percent: &str) -> Self {
        let pair = PairKey::new(&a.symbol, &b.symbol);
        let mut form = remove::Form::default();
        form.select_a(a.clone());
        form.select_b(b.clone());
        form.set_percent(percent);

        let pools = &state.dex.pools;
        let lp_balance = form.lp_balance(pools);
        let inputs = remove::Inputs {
            connected: state.account.connected(),
            loading: state.account.loading,
            dex_loading: state.dex.loading,
            lp_balance,
            approved: form.approved(pools),
            percent: &form.percent,
            transaction: &state.dex.transaction,
        };
        let status = remove::status(&inputs);

        let prices = Prices::new(&pools.reserves(&a.symbol, &b.symbol), &a, &b);
        let prices = if prices.is_empty() {
            PoolPrices::Empty {
                message: position::empty_pool_message(inputs.connected),
            }
        } else {
            PoolPrices::Prices(prices)
        };

        let mut dialog = ConfirmationDialog::new(chain.tracked_transactions.clone());
        dialog.observe(&state.dex.transaction);

        Self {
            pair,
            status,
            label: status.to_string(),
            disabled: remove::disabled(&inputs),
            action: remove::action(&inputs),
            hint: remove::hint(&inputs),
            percent: form.percent.clone(),
            lp_position: position::lp_position(lp_balance, &a, &b),
            prices,
            removal: form.removal(pools, &chain.native_token.symbol),
            dialog_open: dialog.is_open(),
            failure: state
                .dex
                .transaction
                .outcome()
                .and_then(Result::err)
                .map(|err| err.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Farm {
    pub name: String,
    pub lp_tokens: Option<(Symbol, Symbol)>,
    pub pid: u64,
    pub multiplier: u32,
    pub liquidity_usd: BigDecimal,
    pub apr: BigDecimal,
    pub pending_reward: BigDecimal,
    pub staked: BigDecimal,
    pub harvest_disabled: bool,
    pub controls: farm::Controls,
    pub label: String,
}

impl Farm {
    pub fn new(chain: &Chain, state: &AppState, name: &str, pool: &farm::FarmPool) -> Self {
        let card = farm::Card {
            pool,
            state: state.farm.farms.get(&pool.address),
            prices: &state.farm.prices,
            schedule: &chain.reward_schedule,
            transaction: &state.dex.transaction,
        };
        let controls = card.controls();
        Self {
            name: name.to_owned(),
            lp_tokens: farm::lp_symbols(name),
            pid: pool.pid,
            multiplier: pool.multiplier,
            liquidity_usd: card.liquidity_usd(),
            apr: card.apr(),
            pending_reward: card.pending_reward(),
            staked: card.staked(),
            harvest_disabled: card.harvest_disabled(),
            controls,
            label: controls.to_string(),
        }
    }

    pub fn all(chain: &Chain, state: &AppState) -> Vec<Self> {
        chain
            .farms
            .iter()
            .map(|(name, pool)| Self::new(chain, state, name, pool))
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct Transactions {
    pub filter: String,
    pub newest_first: bool,
    /// 1-based.
    pub page: usize,
    pub page_count: usize,
    pub headers: [&'static str; 2],
    pub rows: Vec<analytics::RowView>,
}

impl Transactions {
    pub fn new(table: &analytics::Table, now: DateTime<Utc>) -> Self {
        let filter: Filter = table.filter();
        let (token_in, token_out) = filter.amount_headers();
        Self {
            filter: filter.to_string(),
            newest_first: table.newest_first(),
            page: table.page() + 1,
            page_count: table.page_count(),
            headers: [token_in, token_out],
            rows: table.views(now),
        }
    }
}
