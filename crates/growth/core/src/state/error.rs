//! State initialization errors.

use crate::error::{ErrorSeverity, GrowthError};

/// Errors raised while sizing growth state to the host roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// The host roster does not fit into the bounded state storage.
    #[error("roster of {len} entries exceeds the maximum of {max}")]
    RosterTooLarge { len: usize, max: usize },
}

impl GrowthError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RosterTooLarge { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RosterTooLarge { .. } => "STATE_ROSTER_TOO_LARGE",
        }
    }
}
