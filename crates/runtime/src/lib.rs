//! Synchronous orchestration for the growth allocation engine.
//!
//! This crate wires the command surface, oracle snapshots, and the core
//! transitions into a cohesive runtime API. Hosts embed [`GrowthRuntime`]
//! to dispatch interpreter commands, query the menu model, and consume the
//! resulting events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator
//! - [`command`] parses the host-facing command surface
//! - [`events`] defines the notifications handed back to the host
//! - [`menu`] builds the data model behind the growth menu
//! - [`bootstrap`] stands up a runtime from content files
pub mod bootstrap;
pub mod command;
pub mod error;
pub mod events;
pub mod menu;
pub mod runtime;

pub use bootstrap::{BootstrapError, load_runtime};
pub use command::{DistributeRequest, GrowthCommand};
pub use error::{Result, RuntimeError};
pub use events::GrowthEvent;
pub use menu::{ActorRow, MenuEntry, MenuModel, SlotRow, StatPanel};
pub use runtime::GrowthRuntime;
