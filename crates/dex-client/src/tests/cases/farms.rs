use {
    super::chain,
    crate::{
        domain::{
            Kind,
            farm::{Controls, FarmPool, FarmState, MarketPrices, reward_apr},
        },
        infra::store::{Action, Store},
        views::Farm,
    },
    bigdecimal::BigDecimal,
    num::Zero,
    primitive_types::{H160, U256},
    std::str::FromStr,
};

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

fn pool() -> FarmPool {
    FarmPool {
        address: H160::repeat_byte(0xfa),
        pid: 1,
        decimals: 18,
        multiplier: 40,
        fee_apr: Some(dec("12.5")),
    }
}

#[test]
fn zero_liquidity_yields_zero_reward_apr() {
    let chain = chain();
    let apr = reward_apr(
        &chain.reward_schedule,
        Some(&dec("0.4")),
        Some(&dec("1.5")),
        Some(&dec("0")),
    );
    assert!(apr.is_zero());
}

#[test]
fn farm_cards_follow_the_store() {
    let mut chain = chain();
    chain.farms.insert("PBR-ETH".to_owned(), pool());
    let pool = pool().address;

    let store = Store::default();
    // Nothing loaded yet: only the fee APR counts (12.5 rounds up).
    let farms = Farm::all(&chain, &store.state());
    assert_eq!(farms.len(), 1);
    assert_eq!(farms[0].apr, dec("13"));
    assert_eq!(farms[0].controls, Controls::Approve);
    assert!(farms[0].harvest_disabled);

    store.dispatch(Action::FarmLoading {
        pool,
        loading: true,
    });
    store.dispatch(Action::StartTransaction(Kind::Stake));
    let farms = Farm::all(&chain, &store.state());
    assert_eq!(farms[0].label, "Pending transaction...");

    store.dispatch(Action::PricesLoaded(MarketPrices {
        reward_token_usd: Some(dec("2")),
        eth_usd: Some(dec("1000")),
    }));
    store.dispatch(Action::FarmLoaded {
        pool,
        state: FarmState {
            pool_weight: Some(dec("0.5")),
            pool_lp_tokens: Some(dec("4")),
            pending_reward: Some(U256::exp10(18)),
            staked: Some(U256::exp10(17)),
            approved: Some(true),
            loading: false,
        },
    });

    // 2 * 1000 * 0.5 * $2 = $2000 a year on $4000 -> 50% + 12.5% fees
    let farms = Farm::all(&chain, &store.state());
    assert_eq!(farms[0].liquidity_usd, dec("4000"));
    assert_eq!(farms[0].apr, dec("63"));
    assert_eq!(farms[0].pending_reward, dec("1"));
    assert_eq!(farms[0].staked, dec("0.1"));
    assert!(!farms[0].harvest_disabled);
    assert_eq!(farms[0].controls, Controls::Stake);
}

#[test]
fn single_farm_by_name() {
    let mut chain = chain();
    chain.farms.insert("PBR-ETH".to_owned(), pool());
    chain.farms.insert(
        "PBR-USDC".to_owned(),
        FarmPool {
            address: H160::repeat_byte(0xfb),
            pid: 2,
            ..pool()
        },
    );
    let state = Store::default().state();

    let farm = Farm::new(&chain, &state, "PBR-USDC", chain.farm("PBR-USDC").unwrap());
    assert_eq!(farm.pid, 2);
    assert_eq!(farm.lp_tokens, Some(("PBR".into(), "USDC".into())));
    assert!(chain.farm("PBR-BNB").is_err());
    assert_eq!(Farm::all(&chain, &state).len(), 2);
}
