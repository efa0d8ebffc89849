use {
    super::{eth, usdc},
    crate::{domain::liquidity::add::Form, views::AddLiquidity},
};

#[test]
fn identical_tokens_are_an_invalid_pair() {
    for (a, b) in [("", ""), ("1", "1"), ("0", "5")] {
        let mut form = Form::new(Some(eth()));
        form.select_b(eth());
        form.set_amount_a(a);
        form.set_amount_b(b);

        let view = AddLiquidity::new(&form);
        assert_eq!(view.label, "Invalid pair");
        assert!(view.disabled);
    }
}

#[test]
fn nothing_selected() {
    let form = Form::new(None);
    let view = AddLiquidity::new(&form);
    assert_eq!(view.label, "Select both tokens");
    assert!(view.disabled);
    assert!(view.token_a.is_none());
}

#[test]
fn eth_and_usdc_with_amounts() {
    let mut form = Form::new(Some(eth()));
    form.select_b(usdc());
    form.set_amount_a("1");
    form.set_amount_b("100");

    let view = AddLiquidity::new(&form);
    assert_eq!(view.label, "Add liquidity");
    assert!(!view.disabled);
    assert_eq!(view.token_b, Some("USDC".into()));
}

#[test]
fn clearing_an_amount_asks_for_amounts() {
    let mut form = Form::new(Some(eth()));
    form.select_b(usdc());
    form.set_amount_a("1");
    form.set_amount_b("100");
    form.set_amount_b("");

    assert_eq!(AddLiquidity::new(&form).label, "Enter amounts");
}
