use std::any::TypeId;
use std::marker::PhantomData;

use griddle_states::{Compute, ComputeDeps, ComputeStage, Dep, State, Updater};

use crate::{Car, Employee, GridRow, GridState};

/// Footer figures of one grid, derived from its [`GridState`].
#[derive(Debug, Clone)]
pub struct GridSummary<R> {
    pub total: usize,
    pub selected: usize,
    pub page: usize,
    pub page_count: usize,
    _row: PhantomData<fn() -> R>,
}

impl<R> Default for GridSummary<R> {
    fn default() -> Self {
        Self {
            total: 0,
            selected: 0,
            page: 0,
            page_count: 1,
            _row: PhantomData,
        }
    }
}

impl<R: GridRow> GridSummary<R> {
    pub fn of(grid: &GridState<R>) -> Self {
        Self {
            total: grid.rows().len(),
            selected: grid.selected_count(),
            page: grid.pager().page(),
            page_count: grid.page_count(),
            _row: PhantomData,
        }
    }

    fn publish(deps: &Dep<'_>, updater: &Updater) -> ComputeStage {
        let grid = deps.get_state_ref::<GridState<R>>();
        updater.set(Self::of(grid));
        ComputeStage::Finished
    }
}

impl<R: 'static> State for GridSummary<R> {}

impl Compute for GridSummary<Car> {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 1] = [TypeId::of::<GridState<Car>>()];
        (&STATE_IDS, &[])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) -> ComputeStage {
        Self::publish(&deps, &updater)
    }
}

impl Compute for GridSummary<Employee> {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 1] = [TypeId::of::<GridState<Employee>>()];
        (&STATE_IDS, &[])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) -> ComputeStage {
        Self::publish(&deps, &updater)
    }
}
