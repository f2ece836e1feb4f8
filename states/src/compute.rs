use std::any::TypeId;

use crate::state::ErasedState;
use crate::{Dep, State, Updater};

/// Declared dependencies of a compute: `(state ids, compute ids)`.
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// Result of a single `Compute::compute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeStage {
    /// The compute kicked off work that will publish through the `Updater` later.
    Pending,
    /// The compute is up to date.
    Finished,
}

/// A cached value derived from other states or computes.
///
/// `compute` runs when any dependency was marked dirty during the frame. It never
/// mutates `self` directly; the new value goes through the `Updater` and is
/// assigned on the next [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
///
/// Computes that are only fed by commands declare no dependencies and keep the
/// default no-op `compute`.
pub trait Compute: State {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) -> ComputeStage {
        ComputeStage::Finished
    }
}

pub(crate) trait ErasedCompute: ErasedState {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater) -> ComputeStage;
}

impl<T: Compute> ErasedCompute for T {
    fn deps(&self) -> ComputeDeps {
        Compute::deps(self)
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) -> ComputeStage {
        Compute::compute(self, deps, updater)
    }
}
