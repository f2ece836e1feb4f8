use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::dep::{ComputeSlot, StateSlot};
use crate::updater::Update;
use crate::{
    Command, CommandSnapshot, Compute, ComputeStage, Dep, Error, State, StateSyncStatus,
    TaskHandle, TaskId, Updater,
};

/// Owner of every state, compute and command of the application.
///
/// Frame protocol used by the UI:
/// 1. `sync_computes()` applies values published by commands and computes
/// 2. widgets read with `state` / `cached` and write with `update` / `state_mut`
/// 3. widgets call `dispatch::<C>()` for side effects
/// 4. `run_computed()` re-runs computes whose dependencies changed
pub struct StateCtx {
    states: BTreeMap<TypeId, StateSlot>,
    computes: BTreeMap<TypeId, ComputeSlot>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    dirty: BTreeSet<TypeId>,

    send: Sender<Update>,
    recv: Receiver<Update>,

    done_send: Sender<TaskId>,
    done_recv: Receiver<TaskId>,
    tasks: Vec<TaskHandle>,
    generation: u64,

    #[cfg(not(target_arch = "wasm32"))]
    runtime: Option<tokio::runtime::Runtime>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("dirty", &self.dirty.len())
            .field("tasks", &self.tasks)
            .finish_non_exhaustive()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        let (done_send, done_recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            dirty: BTreeSet::new(),
            send,
            recv,
            done_send,
            done_recv,
            tasks: Vec::new(),
            generation: 0,
            #[cfg(not(target_arch = "wasm32"))]
            runtime: None,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states
            .insert(id, (Box::new(state), StateSyncStatus::BeforeInit));
        self.dirty.insert(id);
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(
            TypeId::of::<T>(),
            (Box::new(compute), StateSyncStatus::BeforeInit),
        );
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|(state, _)| state.as_any().downcast_ref::<T>())
            .ok_or(Error::StateNotFound {
                name: type_name::<T>(),
            })
    }

    /// # Panics
    /// Panics if `T` was never added with `add_state`.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access; marks `T` dirty so dependent computes re-run.
    ///
    /// # Panics
    /// Panics if `T` was never added with `add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.dirty.insert(id);
        self.states
            .get_mut(&id)
            .and_then(|(state, status)| {
                *status = StateSyncStatus::Dirty;
                state.as_any_mut().downcast_mut::<T>()
            })
            .unwrap_or_else(|| panic!("State not found: {}", type_name::<T>()))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Latest value of a compute, `None` if it was never recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|(compute, _)| compute.as_any().downcast_ref::<T>())
    }

    pub fn status<T: State>(&self) -> Option<StateSyncStatus> {
        let id = TypeId::of::<T>();
        self.states
            .get(&id)
            .map(|(_, status)| *status)
            .or_else(|| self.computes.get(&id).map(|(_, status)| *status))
    }

    /// Commands spawned by this context that have not finished yet.
    pub fn in_flight(&self) -> &[TaskHandle] {
        &self.tasks
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, (state, _)) in &self.states {
            if let Some(value) = state.snapshot_boxed() {
                snap.insert_state(*id, value);
            }
        }
        for (id, (compute, _)) in &self.computes {
            if let Some(value) = compute.snapshot_boxed() {
                snap.insert_compute(*id, value);
            }
        }
        snap
    }

    /// Run a recorded command in the background.
    pub fn dispatch<C: Command>(&mut self) {
        let id = TypeId::of::<C>();
        let snap = self.snapshot();
        let token = CancellationToken::new();
        let updater = self.updater();

        let Some(command) = self.commands.get(&id) else {
            error!(
                "{}",
                Error::CommandNotFound {
                    name: type_name::<C>()
                }
            );
            return;
        };
        let future = command.run(snap, updater, token.clone());

        self.generation += 1;
        let task_id = TaskId::new(id, self.generation);
        self.tasks.push(TaskHandle::new(task_id, token));
        debug!("Dispatch {} as task #{}", type_name::<C>(), self.generation);

        let done = self.done_send.clone();
        self.spawn(async move {
            future.await;
            done.send(task_id).ok();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, task: impl Future<Output = ()> + Send + 'static) {
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(task);
            return;
        }

        if self.runtime.is_none() {
            match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("griddle-commands")
                .enable_all()
                .build()
            {
                Ok(runtime) => self.runtime = Some(runtime),
                Err(err) => {
                    error!("Failed to start command runtime: {err}");
                    return;
                }
            }
        }

        if let Some(runtime) = &self.runtime {
            runtime.spawn(task);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, task: impl Future<Output = ()> + Send + 'static) {
        wasm_bindgen_futures::spawn_local(task);
    }

    /// Apply every value published since the last call.
    pub fn sync_computes(&mut self) {
        for finished in self.done_recv.try_iter() {
            self.tasks.retain(|task| task.id() != finished);
        }

        for (id, value) in self.recv.try_iter() {
            if let Some((state, status)) = self.states.get_mut(&id) {
                if state.assign_box(value) {
                    *status = StateSyncStatus::Dirty;
                    self.dirty.insert(id);
                }
            } else if let Some((compute, status)) = self.computes.get_mut(&id) {
                if compute.assign_box(value) {
                    *status = StateSyncStatus::Clean;
                    self.dirty.insert(id);
                }
            } else {
                warn!("Received update for unregistered type {id:?}");
            }
        }
    }

    /// Re-run computes that were never run or whose dependencies are dirty.
    pub fn run_computed(&mut self) {
        let updater = self.updater();
        let mut stages = Vec::new();

        for (id, (compute, status)) in &self.computes {
            let (state_ids, compute_ids) = compute.deps();
            let should_run = *status == StateSyncStatus::BeforeInit
                || state_ids
                    .iter()
                    .chain(compute_ids)
                    .any(|dep| self.dirty.contains(dep));

            if should_run {
                let deps = Dep::new(&self.states, &self.computes);
                stages.push((*id, compute.compute(deps, updater.clone())));
            }
        }

        for (id, stage) in stages {
            if let Some((_, status)) = self.computes.get_mut(&id) {
                *status = match stage {
                    ComputeStage::Pending => StateSyncStatus::Pending,
                    ComputeStage::Finished => StateSyncStatus::Clean,
                };
            }
        }

        for (_, status) in self.states.values_mut() {
            *status = StateSyncStatus::Clean;
        }
        self.dirty.clear();
    }

    /// Cancel every command still running. Called on shutdown.
    pub fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.cancel();
        }
    }
}
