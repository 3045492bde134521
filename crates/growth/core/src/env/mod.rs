//! Traits describing read-only host data.
//!
//! Oracles expose the roster, the current party, and the load-time
//! configuration. The [`Env`] aggregate bundles them so the operations can
//! access everything they need without hard coupling to concrete
//! implementations.
mod config;
mod error;
mod party;
mod roster;
mod snapshot;

pub use config::ConfigOracle;
pub use error::OracleError;
pub use party::PartyOracle;
pub use roster::RosterOracle;
pub use snapshot::{ConfigSnapshot, PartySnapshot, RosterRecord, RosterSnapshot};

/// Aggregates the read-only oracles required by the growth operations.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, R, P, C>
where
    R: RosterOracle + ?Sized,
    P: PartyOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    roster: Option<&'a R>,
    party: Option<&'a P>,
    config: Option<&'a C>,
}

pub type GrowthEnv<'a> =
    Env<'a, dyn RosterOracle + 'a, dyn PartyOracle + 'a, dyn ConfigOracle + 'a>;

impl<'a, R, P, C> Env<'a, R, P, C>
where
    R: RosterOracle + ?Sized,
    P: PartyOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    pub fn new(roster: Option<&'a R>, party: Option<&'a P>, config: Option<&'a C>) -> Self {
        Self {
            roster,
            party,
            config,
        }
    }

    pub fn with_all(roster: &'a R, party: &'a P, config: &'a C) -> Self {
        Self::new(Some(roster), Some(party), Some(config))
    }

    pub fn empty() -> Self {
        Self {
            roster: None,
            party: None,
            config: None,
        }
    }

    /// Returns the RosterOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RosterNotAvailable` if no roster oracle was provided.
    pub fn roster(&self) -> Result<&'a R, OracleError> {
        self.roster.ok_or(OracleError::RosterNotAvailable)
    }

    /// Returns the PartyOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PartyNotAvailable` if no party oracle was provided.
    pub fn party(&self) -> Result<&'a P, OracleError> {
        self.party.ok_or(OracleError::PartyNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }
}

impl<'a, R, P, C> Env<'a, R, P, C>
where
    R: RosterOracle + 'a,
    P: PartyOracle + 'a,
    C: ConfigOracle + 'a,
{
    /// Converts this environment into a trait-object based `GrowthEnv`
    /// (consumes self).
    pub fn into_growth_env(self) -> GrowthEnv<'a> {
        let roster: Option<&'a dyn RosterOracle> = self.roster.map(|roster| roster as _);
        let party: Option<&'a dyn PartyOracle> = self.party.map(|party| party as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        Env::new(roster, party, config)
    }

    /// Converts this environment into a trait-object based `GrowthEnv`
    /// (borrows self).
    ///
    /// Use this when you need to convert multiple times.
    pub fn as_growth_env(&self) -> GrowthEnv<'a> {
        let roster: Option<&'a dyn RosterOracle> = self.roster.map(|roster| roster as _);
        let party: Option<&'a dyn PartyOracle> = self.party.map(|party| party as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        Env::new(roster, party, config)
    }
}
