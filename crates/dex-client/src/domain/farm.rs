//! Yield farming: APR estimation and the state of a farm card.

use {
    super::{
        token::Symbol,
        transaction::{Status as TransactionStatus, Transaction},
    },
    bigdecimal::BigDecimal,
    num::Zero,
    number::serialization::DecimalU256,
    primitive_types::{H160, U256},
    serde::{Deserialize, Serialize},
    serde_with::{DisplayFromStr, serde_as},
};

/// Reward token emission of the farming contract.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RewardSchedule {
    /// Reward tokens minted per block across all pools, in display units.
    #[serde_as(as = "DisplayFromStr")]
    pub reward_per_block: BigDecimal,
    pub blocks_per_year: u64,
}

/// APR in percent from reward emissions alone.
///
/// `pool_weight` is the pool's share of the emissions (`0..=1`). Missing
/// inputs, and a pool without liquidity in particular, yield `0` instead of an
/// infinite APR.
pub fn reward_apr(
    schedule: &RewardSchedule,
    pool_weight: Option<&BigDecimal>,
    reward_price_usd: Option<&BigDecimal>,
    pool_liquidity_usd: Option<&BigDecimal>,
) -> BigDecimal {
    let (Some(weight), Some(price), Some(liquidity)) =
        (pool_weight, reward_price_usd, pool_liquidity_usd)
    else {
        return BigDecimal::zero();
    };
    if liquidity.is_zero() {
        return BigDecimal::zero();
    }
    let yearly_rewards =
        &schedule.reward_per_block * BigDecimal::from(schedule.blocks_per_year) * weight;
    yearly_rewards * price / liquidity * BigDecimal::from(100)
}

/// Reward APR plus trading fee APR, rounded to a whole percentage.
pub fn total_apr(reward_apr: &BigDecimal, trading_fee_apr: Option<&BigDecimal>) -> BigDecimal {
    let fee = trading_fee_apr.cloned().unwrap_or_else(BigDecimal::zero);
    number::units::round_half_up(&(reward_apr + fee))
}

/// USD value of all LP tokens staked in a farm. LP tokens are valued at the
/// ETH price.
pub fn pool_liquidity_usd(
    pool_lp_tokens: Option<&BigDecimal>,
    eth_price_usd: Option<&BigDecimal>,
) -> BigDecimal {
    match (pool_lp_tokens, eth_price_usd) {
        (Some(tokens), Some(price)) => tokens * price,
        _ => BigDecimal::zero(),
    }
}

/// Static description of a farm, from configuration.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FarmPool {
    /// Address of the staked LP token.
    pub address: H160,
    pub pid: u64,
    pub decimals: u8,
    pub multiplier: u32,
    /// APR earned from trading fees, in percent.
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub fee_apr: Option<BigDecimal>,
}

/// Splits a farm name like `"PBR-ETH"` into the symbols of its LP pair.
pub fn lp_symbols(name: &str) -> Option<(Symbol, Symbol)> {
    let (a, b) = name.split_once('-')?;
    (!a.is_empty() && !b.is_empty()).then(|| (a.into(), b.into()))
}

/// Everything loaded from chain about one farm and the user's stake in it.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FarmState {
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub pool_weight: Option<BigDecimal>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub pool_lp_tokens: Option<BigDecimal>,
    #[serde_as(as = "Option<DecimalU256>")]
    pub pending_reward: Option<U256>,
    #[serde_as(as = "Option<DecimalU256>")]
    pub staked: Option<U256>,
    pub approved: Option<bool>,
    #[serde(default)]
    pub loading: bool,
}

/// USD prices supplied by the analytics feed.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MarketPrices {
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub reward_token_usd: Option<BigDecimal>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub eth_usd: Option<BigDecimal>,
}

/// Which controls a farm card offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
pub enum Controls {
    #[strum(serialize = "Approve LP Tokens")]
    Approve,
    #[strum(serialize = "Stake")]
    Stake,
    #[strum(serialize = "Pending transaction...")]
    PendingTransaction,
    #[strum(serialize = "Loading pool...")]
    LoadingPool,
}

/// Decimals of the reward token.
const REWARD_DECIMALS: u32 = 18;

/// Derived view of one farm.
#[derive(Clone, Copy, Debug)]
pub struct Card<'a> {
    pub pool: &'a FarmPool,
    pub state: Option<&'a FarmState>,
    pub prices: &'a MarketPrices,
    pub schedule: &'a RewardSchedule,
    pub transaction: &'a Transaction,
}

impl Card<'_> {
    fn loading(&self) -> bool {
        self.state.is_some_and(|state| state.loading)
    }

    pub fn liquidity_usd(&self) -> BigDecimal {
        pool_liquidity_usd(
            self.state.and_then(|state| state.pool_lp_tokens.as_ref()),
            self.prices.eth_usd.as_ref(),
        )
    }

    pub fn apr(&self) -> BigDecimal {
        let liquidity = self.liquidity_usd();
        let reward = reward_apr(
            self.schedule,
            self.state.and_then(|state| state.pool_weight.as_ref()),
            self.prices.reward_token_usd.as_ref(),
            Some(&liquidity),
        );
        total_apr(&reward, self.pool.fee_apr.as_ref())
    }

    pub fn pending_reward(&self) -> BigDecimal {
        let reward = self
            .state
            .and_then(|state| state.pending_reward)
            .unwrap_or_default();
        number::units::from_base_units(reward, REWARD_DECIMALS)
    }

    pub fn staked(&self) -> BigDecimal {
        let staked = self.state.and_then(|state| state.staked).unwrap_or_default();
        number::units::from_base_units(staked, u32::from(self.pool.decimals))
    }

    /// Harvesting needs something to harvest and no load in progress.
    pub fn harvest_disabled(&self) -> bool {
        self.loading()
            || self
                .state
                .and_then(|state| state.pending_reward)
                .unwrap_or_default()
                .is_zero()
    }

    pub fn controls(&self) -> Controls {
        if self.loading() {
            let pending = self.transaction.kind.is_some()
                && self.transaction.status == TransactionStatus::Pending;
            return if pending {
                Controls::PendingTransaction
            } else {
                Controls::LoadingPool
            };
        }
        if self.state.and_then(|state| state.approved).unwrap_or(false) {
            Controls::Stake
        } else {
            Controls::Approve
        }
    }
}
