use {
    bigdecimal::BigDecimal,
    number::units::{percent_of_balance, to_display_units},
    std::str::FromStr,
};

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

#[test]
fn a_third_of_one_ether() {
    let balance = "1000000000000000000";
    assert_eq!(
        percent_of_balance(balance, "33"),
        dec("330000000000000000")
    );
    assert_eq!(percent_of_balance(balance, "100"), dec(balance));
}

#[test]
fn share_never_exceeds_the_balance() {
    for balance in ["1", "7", "999", "1000000000000000001"] {
        for percent in ["0.1", "33.3333", "66.67", "99.999", "100", "250"] {
            let share = percent_of_balance(balance, percent);
            assert!(share <= dec(balance), "{percent}% of {balance} is {share}");
            assert_eq!(share.with_scale(0), share);
        }
    }
}

#[test]
fn unusable_inputs_give_zero() {
    assert_eq!(percent_of_balance("0", "50"), dec("0"));
    assert_eq!(percent_of_balance("NaN", "50"), dec("0"));
    assert_eq!(percent_of_balance("", "50"), dec("0"));
    assert_eq!(percent_of_balance("1000", "0"), dec("0"));
    assert_eq!(percent_of_balance("1000", ""), dec("0"));
}

#[test]
fn display_units_keep_full_precision() {
    assert_eq!(to_display_units("1", 18), dec("0.000000000000000001"));
    assert_eq!(to_display_units("123456789", 6), dec("123.456789"));
    assert_eq!(to_display_units("not loaded", 6), dec("0"));
}
