//! Order independent addressing of per-pair data.
//!
//! Facts about a pool are stored under `"{A}_{B}"` with whatever token order
//! the first fetch happened to use, so every read has to try both orders.

use {
    super::{
        Error,
        token::{Symbol, Token},
    },
    number::serialization::DecimalU256,
    primitive_types::{H160, U256},
    serde::{Deserialize, Serialize},
    serde_with::{DeserializeFromStr, SerializeDisplay, serde_as},
    std::{collections::HashMap, fmt, str::FromStr},
};

/// Identifier of a token pair as `"{symbol_a}_{symbol_b}"`. The key itself is
/// ordered; [`PairMap`] is what makes lookups order independent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct PairKey {
    a: Symbol,
    b: Symbol,
}

impl PairKey {
    pub fn new(a: &Symbol, b: &Symbol) -> Self {
        Self {
            a: a.clone(),
            b: b.clone(),
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }

    pub fn symbols(&self) -> (&Symbol, &Symbol) {
        (&self.a, &self.b)
    }

    /// Whether both keys name the same unordered pair.
    pub fn same_pair(&self, other: &PairKey) -> bool {
        self == other || *self == other.reversed()
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.a, self.b)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("pair key {0:?} is not of the form A_B")]
pub struct InvalidPairKey(String);

impl FromStr for PairKey {
    type Err = InvalidPairKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('_') {
            Some((a, b)) if !a.is_empty() && !b.is_empty() => Ok(Self {
                a: a.into(),
                b: b.into(),
            }),
            _ => Err(InvalidPairKey(s.to_owned())),
        }
    }
}

/// Two distinct tokens selected for a liquidity operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    pub a: Token,
    pub b: Token,
}

impl Pair {
    pub fn try_new(a: Token, b: Token) -> Result<Self, Error> {
        if a.symbol == b.symbol {
            return Err(Error::InvalidSelection(a.symbol));
        }
        Ok(Self { a, b })
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(&self.a.symbol, &self.b.symbol)
    }

    /// Splits the pair into `(native, other)` if one side is the chain's
    /// native token.
    pub fn split_native(&self, native: &Symbol) -> Option<(&Token, &Token)> {
        if self.a.symbol == *native {
            Some((&self.a, &self.b))
        } else if self.b.symbol == *native {
            Some((&self.b, &self.a))
        } else {
            None
        }
    }
}

/// Map from token pair to `T` holding at most one entry per unordered pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairMap<T>(HashMap<PairKey, T>);

impl<T> Default for PairMap<T> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<T> PairMap<T> {
    /// Stores `value` under `key`, replacing an entry stored under the
    /// reversed key.
    pub fn insert(&mut self, key: PairKey, value: T) -> Option<T> {
        let previous = self.0.remove(&key.reversed());
        self.0.insert(key, value).or(previous)
    }

    /// Looks up `A_B`, then `B_A`.
    pub fn lookup(&self, a: &Symbol, b: &Symbol) -> Option<&T> {
        let key = PairKey::new(a, b);
        self.get(&key)
    }

    pub fn get(&self, key: &PairKey) -> Option<&T> {
        self.0.get(key).or_else(|| self.0.get(&key.reversed()))
    }

    /// Mutable access to the entry for the pair, creating it under `key` if
    /// neither order exists yet.
    pub fn entry_or_default(&mut self, key: &PairKey) -> &mut T
    where
        T: Default,
    {
        let key = if self.0.contains_key(key) || !self.0.contains_key(&key.reversed()) {
            key.clone()
        } else {
            key.reversed()
        };
        self.0.entry(key).or_default()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Pool reserves by token symbol, in base units.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserves(#[serde_as(as = "HashMap<_, DecimalU256>")] HashMap<Symbol, U256>);

impl Reserves {
    pub fn new(reserves: impl IntoIterator<Item = (Symbol, U256)>) -> Self {
        Self(reserves.into_iter().collect())
    }

    /// Reserve of `symbol`, zero if unknown.
    pub fn of(&self, symbol: &Symbol) -> U256 {
        self.0.get(symbol).copied().unwrap_or_default()
    }
}

/// What is known about the pool of one pair. Every field is filled in by a
/// separate fetch, so any of them may be missing.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolFacts {
    #[serde_as(as = "Option<DecimalU256>")]
    pub lp_balance: Option<U256>,
    pub approved: Option<bool>,
    pub reserves: Option<Reserves>,
}

impl PoolFacts {
    /// Takes over every fact `other` carries, keeping the ones it lacks.
    pub fn merge(&mut self, other: PoolFacts) {
        if other.lp_balance.is_some() {
            self.lp_balance = other.lp_balance;
        }
        if other.approved.is_some() {
            self.approved = other.approved;
        }
        if other.reserves.is_some() {
            self.reserves = other.reserves;
        }
    }
}

/// Pool facts for every pair plus the resolved pair contract addresses. The
/// addresses survive a reset of the facts since they never change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolFactMap {
    #[serde(default)]
    pub facts: PairMap<PoolFacts>,
    #[serde(default)]
    pub addresses: PairMap<H160>,
}

impl PoolFactMap {
    /// LP token balance of the pair, `0` when not loaded.
    pub fn lp_balance(&self, a: &Symbol, b: &Symbol) -> U256 {
        self.facts
            .lookup(a, b)
            .and_then(|facts| facts.lp_balance)
            .unwrap_or_default()
    }

    /// Whether the router may spend the pair's LP token, `false` when not
    /// loaded.
    pub fn approved(&self, a: &Symbol, b: &Symbol) -> bool {
        self.facts
            .lookup(a, b)
            .and_then(|facts| facts.approved)
            .unwrap_or(false)
    }

    /// Pool reserves, empty (i.e. all zero) when not loaded.
    pub fn reserves(&self, a: &Symbol, b: &Symbol) -> Reserves {
        self.facts
            .lookup(a, b)
            .and_then(|facts| facts.reserves.clone())
            .unwrap_or_default()
    }

    /// Pair contract address, `None` when not resolved yet.
    pub fn pair_address(&self, a: &Symbol, b: &Symbol) -> Option<H160> {
        self.addresses.lookup(a, b).copied()
    }

    /// Forgets all pool facts but keeps resolved pair addresses.
    pub fn reset(&mut self) {
        self.facts.clear();
    }
}
