use {
    super::{chain, eth, usdc},
    crate::{
        domain::{Kind, PoolFacts, liquidity::remove},
        infra::store::{Action, AppState, Store},
        views::RemoveLiquidity,
    },
    primitive_types::{H160, U256},
};

fn state(lp_balance: u64, approved: bool) -> AppState {
    let store = Store::default();
    store.dispatch(Action::Connected {
        account: H160::repeat_byte(0xaa),
        chain_id: 1,
    });
    store.dispatch(Action::SelectPair("ETH_USDC".parse().unwrap()));
    let generation = store.state().dex.generation;
    store.dispatch(Action::PoolFactsLoaded {
        key: "ETH_USDC".parse().unwrap(),
        generation,
        facts: PoolFacts {
            lp_balance: Some(U256::from(lp_balance)),
            approved: Some(approved),
            reserves: None,
        },
    });
    store.dispatch(Action::FactsSettled { generation });
    store.state()
}

#[test]
fn zero_lp_balance_disables_regardless_of_allowance() {
    let chain = chain();
    for approved in [true, false] {
        let view = RemoveLiquidity::new(&chain, &state(0, approved), eth(), usdc(), "100");
        assert_eq!(view.status, remove::Status::NoLiquidity);
        assert_eq!(view.label, "No liquidity to remove");
        assert!(view.disabled);
        assert!(view.removal.is_none());
    }
}

#[test]
fn approval_comes_before_removal() {
    let chain = chain();
    let view = RemoveLiquidity::new(&chain, &state(1000, false), eth(), usdc(), "25");
    assert_eq!(view.label, "Approve LP token");
    assert_eq!(view.action, remove::Action::Approve);
    assert!(!view.disabled);
    assert!(view.hint.is_some());

    let view = RemoveLiquidity::new(&chain, &state(1000, true), eth(), usdc(), "25");
    assert_eq!(view.label, "Remove Liquidity");
    assert_eq!(view.action, remove::Action::Remove);
    assert_eq!(
        view.removal.map(|removal| (removal.route, removal.lp_amount)),
        Some((
            remove::Route::Native {
                native: "ETH".into(),
                token: "USDC".into()
            },
            U256::from(250_u64)
        ))
    );
}

#[test]
fn disconnected_wallet() {
    let chain = chain();
    let view = RemoveLiquidity::new(&chain, &AppState::default(), eth(), usdc(), "");
    assert_eq!(view.label, "Connect Wallet");
    assert_eq!(view.action, remove::Action::Connect);
    assert!(!view.disabled);
}

#[test]
fn pending_removal_shows_in_label_and_dialog() {
    let chain = chain();
    let mut state = state(1000, true);
    state.dex.transaction = crate::domain::Transaction::pending(Kind::Remove);

    let view = RemoveLiquidity::new(&chain, &state, eth(), usdc(), "50");
    assert_eq!(view.label, "Pending Transaction...");
    assert!(!view.disabled);
    assert!(view.dialog_open);
}

#[test]
fn failed_removal_reports_why() {
    let chain = chain();
    let mut state = state(1000, true);
    let view = RemoveLiquidity::new(&chain, &state, eth(), usdc(), "50");
    assert_eq!(view.failure, None);

    state.dex.transaction = crate::domain::Transaction::pending(Kind::Remove);
    state
        .dex
        .transaction
        .advance(crate::domain::transaction::Status::Failed, None)
        .unwrap();
    let view = RemoveLiquidity::new(&chain, &state, eth(), usdc(), "50");
    assert!(view.failure.unwrap().ends_with("failed"));
}

#[test]
fn view_serializes_for_output() {
    let chain = chain();
    let view = RemoveLiquidity::new(&chain, &state(1000, true), eth(), usdc(), "50");
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["pair"], "ETH_USDC");
    assert_eq!(json["label"], "Remove Liquidity");
    assert_eq!(json["action"], "remove");
    assert_eq!(json["removal"]["route"], "native");
    assert_eq!(json["removal"]["lp_amount"], "500");
    assert_eq!(json["prices"]["message"], "No liquidity available for selected pool");
}
