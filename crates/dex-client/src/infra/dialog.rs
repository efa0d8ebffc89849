use {
    super::store::{Action, Store},
    crate::domain::transaction::{Acknowledgement, ConfirmationDialog, Kind},
    tokio::{
        sync::{mpsc, watch},
        task::JoinHandle,
    },
};

enum Command {
    Show,
    Close,
}

/// Handle of a running confirmation dialog. Dropping it stops the dialog.
pub struct DialogHandle {
    visible: watch::Receiver<bool>,
    commands: mpsc::UnboundedSender<Command>,
    task: JoinHandle<()>,
}

/// Starts following the store's transaction record for the `tracked` kinds.
pub fn spawn(store: Store, tracked: Vec<Kind>) -> DialogHandle {
    let (visible_tx, visible) = watch::channel(false);
    let (commands, mut received) = mpsc::unbounded_channel();
    let mut updates = store.subscribe();

    let task = tokio::spawn(async move {
        let mut dialog = ConfirmationDialog::new(tracked);
        dialog.observe(&updates.borrow_and_update().dex.transaction);
        visible_tx.send_replace(dialog.is_open());

        loop {
            tokio::select! {
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let transaction = updates.borrow_and_update().dex.transaction.clone();
                    dialog.observe(&transaction);
                }
                command = received.recv() => match command {
                    Some(Command::Show) => dialog.show(),
                    Some(Command::Close) => {
                        let transaction = store.state().dex.transaction;
                        if dialog.close(&transaction) == Acknowledgement::Reset {
                            tracing::debug!(kind = ?transaction.kind, "transaction acknowledged");
                            store.dispatch(Action::ResetTransaction);
                        }
                    }
                    None => break,
                },
            }
            visible_tx.send_if_modified(|visible| {
                let open = dialog.is_open();
                let changed = *visible != open;
                *visible = open;
                changed
            });
        }
    });

    DialogHandle {
        visible,
        commands,
        task,
    }
}

impl DialogHandle {
    pub fn is_visible(&self) -> bool {
        *self.visible.borrow()
    }

    /// Receiver of the dialog's visibility.
    pub fn visibility(&self) -> watch::Receiver<bool> {
        self.visible.clone()
    }

    /// Opens the dialog without a transaction update.
    pub fn show(&self) {
        let _ = self.commands.send(Command::Show);
    }

    /// The user closed the dialog. A settled transaction is reset to idle.
    pub fn acknowledge(&self) {
        let _ = self.commands.send(Command::Close);
    }
}

impl Drop for DialogHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
