//! Loading of pool facts for the selected pair.

use {
    super::store::{Action, Store},
    crate::domain::{Error, Pair, PoolFacts, Reserves},
    anyhow::Result,
    primitive_types::{H160, U256},
    std::sync::{Arc, Mutex, PoisonError},
    tokio::task::JoinHandle,
};

/// Reads pool facts from chain.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FactSource: Send + Sync {
    /// Address of the pair contract of `pair`.
    async fn pair_address(&self, pair: &Pair) -> Result<H160>;

    /// LP token balance of `account` in the pair contract.
    async fn lp_balance(&self, pair: H160, account: H160) -> Result<U256>;

    /// Whether `account` allowed the router to spend its LP tokens.
    async fn allowance(&self, pair: H160, account: H160) -> Result<bool>;

    /// Reserves of the pair contract, by symbol.
    async fn reserves(&self, pair_address: H160, pair: &Pair) -> Result<Reserves>;
}

/// Loads pool facts whenever the selected pair changes.
///
/// Only the most recent selection is ever loading: selecting a pair aborts
/// the fetch of the previous one, and the store drops any result that still
/// slips through. Account changes make running fetches stale as well; call
/// [`PairLoader::reload`] afterwards.
pub struct PairLoader {
    store: Store,
    source: Arc<dyn FactSource>,
    selected: Mutex<Option<Pair>>,
    inflight: Mutex<Option<JoinHandle<()>>>,
}

impl PairLoader {
    pub fn new(store: Store, source: Arc<dyn FactSource>) -> Self {
        Self {
            store,
            source,
            selected: Mutex::new(None),
            inflight: Mutex::new(None),
        }
    }

    /// Loads the last selected pair again, e.g. for a newly connected
    /// account. Returns the new generation, `None` if nothing was selected.
    pub fn reload(&self) -> Option<u64> {
        let pair = self
            .selected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()?;
        Some(self.select(pair))
    }

    /// Resets pool facts, then starts loading the facts of `pair`. Returns
    /// the generation the results will be tagged with.
    pub fn select(&self, pair: Pair) -> u64 {
        self.store.dispatch(Action::SelectPair(pair.key()));
        *self.selected.lock().unwrap_or_else(PoisonError::into_inner) = Some(pair.clone());
        let state = self.store.state();
        let generation = state.dex.generation;
        let known_address = state.dex.pools.pair_address(&pair.a.symbol, &pair.b.symbol);

        let task = tokio::spawn(load(
            self.store.clone(),
            self.source.clone(),
            pair,
            known_address,
            state.account.current_account,
            generation,
        ));
        let previous = self
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
        generation
    }

    /// Waits until the fetch of the current selection is done.
    pub async fn settled(&self) {
        let task = self
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = task {
            if let Err(err) = task.await {
                if !err.is_cancelled() {
                    tracing::error!(?err, "pool fact task failed");
                }
            }
        }
    }
}

impl Drop for PairLoader {
    fn drop(&mut self) {
        let task = self
            .inflight
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = task {
            task.abort();
        }
    }
}

/// Rejected fetches count as "not loaded".
fn loaded<T>(result: Result<T>, what: &'static str, pair: &Pair) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key = %pair.key(), ?err, "{}", Error::NotLoaded(what));
            None
        }
    }
}

async fn load(
    store: Store,
    source: Arc<dyn FactSource>,
    pair: Pair,
    known_address: Option<H160>,
    account: Option<H160>,
    generation: u64,
) {
    let key = pair.key();
    let address = match known_address {
        Some(address) => Some(address),
        None => loaded(source.pair_address(&pair).await, "pair address", &pair),
    };
    let Some(address) = address else {
        store.dispatch(Action::FactsSettled { generation });
        return;
    };
    store.dispatch(Action::PairAddressResolved {
        key: key.clone(),
        generation,
        address,
    });

    let facts = match account {
        Some(account) => {
            let (lp_balance, approved, reserves) = futures::join!(
                source.lp_balance(address, account),
                source.allowance(address, account),
                source.reserves(address, &pair),
            );
            PoolFacts {
                lp_balance: loaded(lp_balance, "LP balance", &pair),
                approved: loaded(approved, "LP token allowance", &pair),
                reserves: loaded(reserves, "reserves", &pair),
            }
        }
        None => PoolFacts {
            reserves: loaded(source.reserves(address, &pair).await, "reserves", &pair),
            ..Default::default()
        },
    };
    tracing::debug!(%key, generation, ?facts, "loaded pool facts");
    store.dispatch(Action::PoolFactsLoaded {
        key,
        generation,
        facts,
    });
    store.dispatch(Action::FactsSettled { generation });
}
