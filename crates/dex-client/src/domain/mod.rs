pub mod analytics;
pub mod error;
pub mod farm;
pub mod liquidity;
pub mod pair;
pub mod token;
pub mod transaction;

pub use {
    error::Error,
    pair::{Pair, PairKey, PairMap, PoolFactMap, PoolFacts, Reserves},
    token::{Symbol, Token, TokenList},
    transaction::{Kind, Transaction},
};
