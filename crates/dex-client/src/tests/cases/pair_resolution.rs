use {
    super::{chain, eth, usdc},
    crate::{
        domain::{PoolFacts, Reserves},
        infra::store::{Action, Store},
        views::{PoolPrices, RemoveLiquidity},
    },
    primitive_types::{H160, U256},
};

/// Facts stored under `USDC_ETH`, as if the first fetch used that order.
fn store() -> Store {
    let store = Store::default();
    store.dispatch(Action::Connected {
        account: H160::repeat_byte(0xaa),
        chain_id: 1,
    });
    store.dispatch(Action::SelectPair("USDC_ETH".parse().unwrap()));
    let generation = store.state().dex.generation;
    store.dispatch(Action::PoolFactsLoaded {
        key: "USDC_ETH".parse().unwrap(),
        generation,
        facts: PoolFacts {
            lp_balance: Some(U256::exp10(12)),
            approved: Some(true),
            reserves: Some(Reserves::new([
                ("ETH".into(), U256::exp10(18)),
                ("USDC".into(), U256::from(2_000_000_000_u64)),
            ])),
        },
    });
    store.dispatch(Action::FactsSettled { generation });
    store
}

#[test]
fn both_orderings_resolve_identically() {
    let chain = chain();
    let state = store().state();

    let forward = RemoveLiquidity::new(&chain, &state, eth(), usdc(), "50");
    let backward = RemoveLiquidity::new(&chain, &state, usdc(), eth(), "50");

    assert_eq!(forward.status, backward.status);
    assert_eq!(forward.disabled, backward.disabled);
    assert_eq!(forward.lp_position, backward.lp_position);
    assert_eq!(
        forward.removal.as_ref().map(|removal| removal.lp_amount),
        backward.removal.as_ref().map(|removal| removal.lp_amount)
    );

    let (PoolPrices::Prices(forward), PoolPrices::Prices(backward)) =
        (forward.prices, backward.prices)
    else {
        panic!("pool has reserves");
    };
    assert_eq!(forward.b_per_a, backward.a_per_b);
    assert_eq!(forward.a_per_b, backward.b_per_a);
    assert_eq!(forward.b_per_a, "2000".parse().unwrap());
}

#[test]
fn unrelated_pair_falls_back_to_sentinels() {
    let chain = chain();
    let state = store().state();
    let view = RemoveLiquidity::new(&chain, &state, eth(), super::pbr(), "50");

    assert_eq!(view.label, "No liquidity to remove");
    assert!(view.removal.is_none());
    assert!(matches!(
        view.prices,
        PoolPrices::Empty {
            message: "No liquidity available for selected pool"
        }
    ));
}
