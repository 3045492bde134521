//! Data-driven content definitions and loaders.
//!
//! This crate converts on-disk TOML data into growth-core types:
//! - Growth configuration (slot tables, labels, menu entry, sound cue)
//! - Roster/party fixtures (snapshot oracles for host adapters and tests)
//!
//! Content is consumed by runtime oracles and never appears in growth state.

#[cfg(feature = "loaders")]
pub mod formats;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, RosterLoader};
