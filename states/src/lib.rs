//! State runtime shared by the business layer and the UI.
//!
//! The runtime keeps three kinds of entries, all keyed by their `TypeId`:
//! - [`State`]: plain values owned by the UI thread.
//! - [`Compute`]: cached values derived from states, re-run when a dependency changes.
//! - [`Command`]: explicit side effects (network IO), dispatched by the UI.
//!
//! Async work publishes results through an [`Updater`]; the UI drains them once per
//! frame with [`StateCtx::sync_computes`].

mod basic_state;
mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod snapshot;
mod state;
mod state_sync_status;
mod task;
mod updater;

pub use basic_state::Time;
pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps, ComputeStage};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
pub use updater::Updater;

pub use tokio_util::sync::CancellationToken;
