//! End to end scenarios over the store and the derived views.

mod add_liquidity;
mod amounts;
mod farms;
mod pair_resolution;
mod remove_liquidity;
mod transaction_dialog;
mod transactions;

use {
    crate::{
        domain::{Token, TokenList, farm::RewardSchedule, liquidity::remove},
        infra::config::Chain,
    },
    primitive_types::H160,
    std::collections::BTreeMap,
};

pub fn token(symbol: &str, decimals: u8, address: u8) -> Token {
    Token {
        symbol: symbol.into(),
        address: H160::repeat_byte(address),
        decimals,
        icon: None,
    }
}

pub fn eth() -> Token {
    token("ETH", 18, 1)
}

pub fn usdc() -> Token {
    token("USDC", 6, 2)
}

pub fn pbr() -> Token {
    token("PBR", 18, 3)
}

pub fn chain() -> Chain {
    Chain {
        id: 1,
        native_token: eth(),
        default_pool: (eth(), pbr()),
        tracked_transactions: remove::TRACKED.to_vec(),
        tokens: TokenList::try_new(vec![eth(), usdc(), pbr()]).unwrap(),
        reward_schedule: RewardSchedule {
            reward_per_block: "2".parse().unwrap(),
            blocks_per_year: 1_000,
        },
        farms: BTreeMap::new(),
    }
}
