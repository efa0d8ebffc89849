//! Application state shared by every view, with a single update path.

use {
    crate::domain::{
        PairKey,
        PoolFactMap,
        PoolFacts,
        farm::{FarmState, MarketPrices},
        transaction::{self, Kind, Transaction},
    },
    primitive_types::{H160, H256},
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, sync::Arc},
    tokio::sync::watch,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppState {
    pub account: Account,
    pub dex: Dex,
    pub farm: Farm,
}

/// The connected wallet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Account {
    pub current_account: Option<H160>,
    pub chain_id: Option<u64>,
    pub loading: bool,
}

impl Account {
    pub fn connected(&self) -> bool {
        self.current_account.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Dex {
    /// Pair the pool facts are currently being loaded for.
    pub selection: Option<PairKey>,
    /// Bumped on every selection and account change; fetch results carry
    /// the generation they were started for.
    pub generation: u64,
    pub pools: PoolFactMap,
    pub loading: bool,
    pub transaction: Transaction,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Farm {
    /// Loaded farm state by LP token address.
    pub farms: HashMap<H160, FarmState>,
    pub prices: MarketPrices,
}

/// Every way the state can change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Connected { account: H160, chain_id: u64 },
    Disconnected,
    AccountLoading(bool),
    /// The user picked a new pair: pool facts are reset and loading starts.
    SelectPair(PairKey),
    PairAddressResolved {
        key: PairKey,
        generation: u64,
        address: H160,
    },
    PoolFactsLoaded {
        key: PairKey,
        generation: u64,
        facts: PoolFacts,
    },
    /// All fetches of a generation are done.
    FactsSettled { generation: u64 },
    StartTransaction(Kind),
    TransactionUpdated {
        status: transaction::Status,
        hash: Option<H256>,
    },
    /// The user acknowledged a settled transaction.
    ResetTransaction,
    FarmLoading { pool: H160, loading: bool },
    FarmLoaded { pool: H160, state: FarmState },
    PricesLoaded(MarketPrices),
}

impl Dex {
    /// Whether a fetch result still belongs to the current selection.
    fn is_current(&self, key: &PairKey, generation: u64) -> bool {
        generation == self.generation
            && self
                .selection
                .as_ref()
                .is_some_and(|selection| selection.same_pair(key))
    }

    /// Makes every running fetch stale. The selection stays; it has to be
    /// loaded again for the new account.
    fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
    }
}

/// Applies `action` to `state`. Returns whether anything changed.
pub fn reduce(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::Connected {
            account,
            chain_id,
        } => {
            if state.account.current_account == Some(account)
                && state.account.chain_id == Some(chain_id)
            {
                return false;
            }
            if state.account.chain_id == Some(chain_id) {
                state.dex.pools.reset();
            } else {
                // Pair addresses are per chain.
                state.dex.pools = PoolFactMap::default();
            }
            state.account.current_account = Some(account);
            state.account.chain_id = Some(chain_id);
            state.dex.invalidate();
        }
        Action::Disconnected => {
            state.account = Account::default();
            state.dex.pools.reset();
            state.dex.invalidate();
        }
        Action::AccountLoading(loading) => state.account.loading = loading,
        Action::SelectPair(key) => {
            state.dex.pools.reset();
            state.dex.selection = Some(key);
            state.dex.generation += 1;
            state.dex.loading = true;
        }
        Action::PairAddressResolved {
            key,
            generation,
            address,
        } => {
            if !state.dex.is_current(&key, generation) {
                tracing::debug!(%key, generation, "dropping stale pair address");
                return false;
            }
            state.dex.pools.addresses.insert(key, address);
        }
        Action::PoolFactsLoaded {
            key,
            generation,
            facts,
        } => {
            if !state.dex.is_current(&key, generation) {
                tracing::debug!(%key, generation, "dropping stale pool facts");
                return false;
            }
            state.dex.pools.facts.entry_or_default(&key).merge(facts);
        }
        Action::FactsSettled { generation } => {
            if generation != state.dex.generation {
                return false;
            }
            state.dex.loading = false;
        }
        Action::StartTransaction(kind) => state.dex.transaction = Transaction::pending(kind),
        Action::TransactionUpdated { status, hash } => {
            if let Err(err) = state.dex.transaction.advance(status, hash) {
                tracing::warn!(?err, "ignoring transaction update");
                return false;
            }
        }
        Action::ResetTransaction => state.dex.transaction = Transaction::idle(),
        Action::FarmLoading { pool, loading } => {
            state.farm.farms.entry(pool).or_default().loading = loading;
        }
        Action::FarmLoaded { pool, state: farm } => {
            state.farm.farms.insert(pool, farm);
        }
        Action::PricesLoaded(prices) => state.farm.prices = prices,
    }
    true
}

/// Holds the [`AppState`] and notifies subscribers of every change.
#[derive(Clone, Debug)]
pub struct Store(Arc<watch::Sender<AppState>>);

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self(Arc::new(watch::Sender::new(state)))
    }

    pub fn dispatch(&self, action: Action) {
        tracing::trace!(?action, "dispatch");
        self.0.send_if_modified(|state| reduce(state, action));
    }

    /// Receiver that sees the current state and every later change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.0.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.0.borrow().clone()
    }
}
