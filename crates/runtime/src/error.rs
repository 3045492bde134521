//! Runtime errors.

use growth_core::{DistributeError, InitializationError, OracleError, PurchaseError, ResetError};

/// Errors surfaced by the runtime API.
///
/// Each variant wraps the typed core error; precondition failures
/// (insufficient points, at cap) only reach callers that bypass the
/// availability predicates.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Initialization(#[from] InitializationError),

    #[error(transparent)]
    Distribute(#[from] DistributeError),

    #[error(transparent)]
    Purchase(#[from] PurchaseError),

    #[error(transparent)]
    Reset(#[from] ResetError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
