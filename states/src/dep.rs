use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::compute::ErasedCompute;
use crate::state::ErasedState;
use crate::{Compute, State, StateSyncStatus};

pub(crate) type StateSlot = (Box<dyn ErasedState>, StateSyncStatus);
pub(crate) type ComputeSlot = (Box<dyn ErasedCompute>, StateSyncStatus);

/// Read-only view over the registered states and computes, handed to
/// `Compute::compute`.
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, StateSlot>,
    computes: &'a BTreeMap<TypeId, ComputeSlot>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, StateSlot>,
        computes: &'a BTreeMap<TypeId, ComputeSlot>,
    ) -> Self {
        Self { states, computes }
    }

    /// # Panics
    /// Panics if `T` was never added; a compute may only read what it declares.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|(state, _)| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never recorded.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|(compute, _)| compute.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("Compute {} is not recorded", type_name::<T>()))
    }
}
