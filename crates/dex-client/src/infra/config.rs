//! Static per-chain configuration, read from a TOML file.

use {
    crate::domain::{
        Kind,
        Symbol,
        Token,
        TokenList,
        farm::{FarmPool, RewardSchedule},
        liquidity::remove,
    },
    anyhow::{Context, Result, anyhow},
    serde::Deserialize,
    serde_with::{DisplayFromStr, serde_as},
    std::{collections::BTreeMap, path::Path},
};

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Config {
    #[serde_as(as = "BTreeMap<DisplayFromStr, _>")]
    chains: BTreeMap<u64, ChainConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ChainConfig {
    native_token: Symbol,
    default_pool_tokens: (Symbol, Symbol),
    #[serde(default = "default_tracked_transactions")]
    tracked_transactions: Vec<Kind>,
    tokens: Vec<Token>,
    reward_schedule: RewardSchedule,
    #[serde(default)]
    farms: BTreeMap<String, FarmPool>,
}

fn default_tracked_transactions() -> Vec<Kind> {
    remove::TRACKED.to_vec()
}

/// Everything the client needs to know about one chain.
#[derive(Clone, Debug)]
pub struct Chain {
    pub id: u64,
    pub native_token: Token,
    /// Pair preselected when the pool view opens.
    pub default_pool: (Token, Token),
    /// Transaction kinds the confirmation dialog follows.
    pub tracked_transactions: Vec<Kind>,
    pub tokens: TokenList,
    pub reward_schedule: RewardSchedule,
    /// Farms by name, e.g. `"PBR-ETH"`.
    pub farms: BTreeMap<String, FarmPool>,
}

impl Chain {
    /// Resolves a token by symbol or address.
    pub fn token(&self, symbol_or_address: &str) -> Result<Token> {
        self.tokens
            .find(symbol_or_address)
            .cloned()
            .ok_or_else(|| anyhow!("unknown token {symbol_or_address} on chain {}", self.id))
    }

    pub fn farm(&self, name: &str) -> Result<&FarmPool> {
        self.farms
            .get(name)
            .ok_or_else(|| anyhow!("unknown farm {name} on chain {}", self.id))
    }

    /// Adds tokens imported by address. Tokens whose symbol is already
    /// listed are skipped.
    pub fn import_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) {
        for token in tokens {
            let symbol = token.symbol.clone();
            if !self.tokens.import(token) {
                tracing::warn!(%symbol, chain = self.id, "skipping imported token");
            }
        }
    }
}

fn chain(id: u64, config: ChainConfig) -> Result<Chain> {
    let tokens = TokenList::try_new(config.tokens)?;
    let find = |symbol: &Symbol| {
        tokens
            .find(symbol.as_str())
            .cloned()
            .ok_or_else(|| anyhow!("token {symbol} is not listed"))
    };
    let native_token = find(&config.native_token)?;
    let default_pool = (
        find(&config.default_pool_tokens.0)?,
        find(&config.default_pool_tokens.1)?,
    );
    Ok(Chain {
        id,
        native_token,
        default_pool,
        tracked_transactions: config.tracked_transactions,
        tokens,
        reward_schedule: config.reward_schedule,
        farms: config.farms,
    })
}

fn parse(data: &str, chain_id: u64) -> Result<Chain> {
    let mut config: Config = toml::de::from_str(data).context("invalid configuration")?;
    let chain_config = config
        .chains
        .remove(&chain_id)
        .ok_or_else(|| anyhow!("chain {chain_id} is not configured"))?;
    chain(chain_id, chain_config)
        .with_context(|| format!("invalid configuration of chain {chain_id}"))
}

/// Loads the configuration of `chain_id` from the TOML file at `path`.
pub async fn load(path: &Path, chain_id: u64) -> Result<Chain> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let chain = parse(&data, chain_id)?;
    tracing::debug!(
        chain = chain.id,
        tokens = chain.tokens.iter().count(),
        farms = chain.farms.len(),
        "loaded configuration"
    );
    Ok(chain)
}
