use {
    super::{
        token::Symbol,
        transaction::{Kind, Status},
    },
    primitive_types::H256,
};

/// Failures the domain knows about. None of these ever escapes a derivation:
/// views map them to placeholders, disabled buttons or the failed state of the
/// confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0} has not been loaded")]
    NotLoaded(&'static str),
    #[error("{0} cannot be paired with itself")]
    InvalidSelection(Symbol),
    #[error("{kind} transaction {hash:?} failed")]
    TransactionFailed { kind: Kind, hash: Option<H256> },
    #[error("transaction status cannot move from {from} to {to}")]
    InvalidTransition { from: Status, to: Status },
}
