//! The shared record of the transaction currently in flight and the
//! confirmation dialog following it.

use {
    super::Error,
    primitive_types::H256,
    serde::{Deserialize, Serialize},
};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    Add,
    Remove,
    LpTokenApprove,
    Swap,
    Stake,
    Unstake,
    Harvest,
    FarmLpApprove,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Success,
    Failed,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }

    /// Statuses only ever move forward: idle -> pending -> success | failed.
    /// Repeating the current status is allowed so that late updates (e.g. the
    /// hash arriving) can be applied.
    fn can_advance_to(self, next: Status) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Pending)
                | (Self::Pending, Self::Pending | Self::Success | Self::Failed)
        ) || (self == next && self != Self::Idle)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Transaction {
    #[serde(default)]
    pub kind: Option<Kind>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub hash: Option<H256>,
}

impl Transaction {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn pending(kind: Kind) -> Self {
        Self {
            kind: Some(kind),
            status: Status::Pending,
            hash: None,
        }
    }

    /// Moves the record to `status`, keeping the previous hash unless a new
    /// one is provided.
    pub fn advance(&mut self, status: Status, hash: Option<H256>) -> Result<(), Error> {
        if !self.status.can_advance_to(status) {
            return Err(Error::InvalidTransition {
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        if hash.is_some() {
            self.hash = hash;
        }
        Ok(())
    }

    /// Whether the record is about one of `kinds`.
    pub fn is_one_of(&self, kinds: &[Kind]) -> bool {
        self.kind.is_some_and(|kind| kinds.contains(&kind))
    }

    pub fn is_pending(&self, kinds: &[Kind]) -> bool {
        self.is_one_of(kinds) && self.status == Status::Pending
    }

    /// The final outcome once the transaction has settled.
    pub fn outcome(&self) -> Option<Result<(), Error>> {
        match (self.status, self.kind) {
            (Status::Success, _) => Some(Ok(())),
            (Status::Failed, Some(kind)) => Some(Err(Error::TransactionFailed {
                kind,
                hash: self.hash,
            })),
            _ => None,
        }
    }

    fn is_blank(&self) -> bool {
        self.kind.is_none() && self.hash.is_none()
    }
}

/// What closing the dialog means for the shared record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acknowledgement {
    /// The transaction settled and the user saw it. The shared record must be
    /// reset to idle.
    Reset,
    /// Closed while the transaction is still in flight. The record stays.
    Dismissed,
}

/// Follows the shared transaction record and decides whether the
/// confirmation dialog is shown.
///
/// The dialog opens as soon as a tracked transaction is pending and stays open
/// after it settled. There is no timeout; only [`ConfirmationDialog::close`]
/// hides it.
#[derive(Clone, Debug)]
pub struct ConfirmationDialog {
    tracked: Vec<Kind>,
    open: bool,
}

impl ConfirmationDialog {
    pub fn new(tracked: Vec<Kind>) -> Self {
        Self {
            tracked,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn tracked(&self) -> &[Kind] {
        &self.tracked
    }

    /// Opens the dialog without a record update, e.g. when the user starts an
    /// action while data is still loading.
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Applies an update of the shared record.
    pub fn observe(&mut self, transaction: &Transaction) {
        if transaction.is_blank() || !transaction.is_one_of(&self.tracked) {
            return;
        }
        if transaction.status == Status::Pending || transaction.status.is_terminal() {
            self.open = true;
        }
    }

    /// User closed the dialog.
    pub fn close(&mut self, transaction: &Transaction) -> Acknowledgement {
        self.open = false;
        if transaction.is_one_of(&self.tracked) && transaction.status.is_terminal() {
            Acknowledgement::Reset
        } else {
            Acknowledgement::Dismissed
        }
    }
}
