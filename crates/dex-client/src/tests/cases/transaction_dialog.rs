use {
    crate::{
        domain::{
            Kind,
            Transaction,
            liquidity::remove,
            transaction::{Acknowledgement, ConfirmationDialog, Status},
        },
        infra::{
            dialog,
            store::{Action, Store},
        },
    },
    primitive_types::H256,
};

#[test]
fn pending_opens_success_keeps_close_resets() {
    let store = Store::default();
    let mut dialog = ConfirmationDialog::new(remove::TRACKED.to_vec());

    store.dispatch(Action::StartTransaction(Kind::Remove));
    dialog.observe(&store.state().dex.transaction);
    assert!(dialog.is_open());

    store.dispatch(Action::TransactionUpdated {
        status: Status::Success,
        hash: Some(H256::repeat_byte(9)),
    });
    dialog.observe(&store.state().dex.transaction);
    assert!(dialog.is_open());

    if dialog.close(&store.state().dex.transaction) == Acknowledgement::Reset {
        store.dispatch(Action::ResetTransaction);
    }
    assert!(!dialog.is_open());
    assert_eq!(store.state().dex.transaction, Transaction::idle());
}

#[tokio::test(start_paused = true)]
async fn settled_transaction_waits_for_the_user() {
    let store = Store::default();
    let handle = dialog::spawn(store.clone(), remove::TRACKED.to_vec());
    let mut visibility = handle.visibility();

    store.dispatch(Action::StartTransaction(Kind::LpTokenApprove));
    visibility.wait_for(|visible| *visible).await.unwrap();
    store.dispatch(Action::TransactionUpdated {
        status: Status::Failed,
        hash: None,
    });

    // No timeout closes the dialog.
    tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
    assert!(handle.is_visible());
    assert_eq!(store.state().dex.transaction.status, Status::Failed);

    handle.acknowledge();
    visibility.wait_for(|visible| !*visible).await.unwrap();
    assert_eq!(store.state().dex.transaction, Transaction::idle());
}
