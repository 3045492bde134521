//! Oracle availability errors.

use crate::error::{ErrorSeverity, GrowthError};

/// A required oracle was not provided to the environment.
///
/// These are wiring failures, not gameplay conditions: an operation that
/// needs roster data cannot proceed without a roster oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("roster oracle not available")]
    RosterNotAvailable,

    #[error("party oracle not available")]
    PartyNotAvailable,

    #[error("config oracle not available")]
    ConfigNotAvailable,
}

impl GrowthError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RosterNotAvailable => "ORACLE_ROSTER_NOT_AVAILABLE",
            Self::PartyNotAvailable => "ORACLE_PARTY_NOT_AVAILABLE",
            Self::ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
        }
    }
}
