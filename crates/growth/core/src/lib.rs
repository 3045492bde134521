//! Deterministic growth-point allocation logic shared across hosts.
//!
//! `growth-core` defines the canonical rules (target selection, point
//! distribution, stat purchase, growth reset) and exposes pure APIs that can
//! be reused by the runtime and offline tools. All state mutation flows
//! through the transitions in [`op`], and supporting crates depend on the
//! types re-exported here.
pub mod config;
pub mod env;
pub mod error;
pub mod op;
pub mod slots;
pub mod state;

pub use config::{GrowthConfig, MenuCommandConfig, SoundCue};
pub use env::{
    ConfigOracle, ConfigSnapshot, Env, GrowthEnv, OracleError, PartyOracle, PartySnapshot,
    RosterOracle, RosterRecord, RosterSnapshot,
};
pub use error::{ErrorSeverity, GrowthError};
pub use op::{
    DistributeAction, DistributeError, DistributeReceipt, GrowthTransition, PurchaseAction,
    PurchaseError, PurchaseReceipt, ResetError, ResetGrowthAction, ResetReceipt, TargetGroup,
    TargetGroupError, TargetToken, can_purchase, execute, has_headroom, pending_grant,
};
pub use slots::{SlotConfig, SlotId, SlotTable};
pub use state::{
    ActorId, ClassId, GrowthState, InitializationError, PointLedger, ProgressTable, StateId,
    SwitchId,
};
