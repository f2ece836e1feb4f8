use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

pub(crate) type Update = (TypeId, Box<dyn Any + Send>);

/// Publishes replacement values for states and computes.
///
/// Values are queued and applied by the owning `StateCtx` on its next
/// `sync_computes`. When several values for the same type are queued in one
/// frame, the last one wins.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            warn!(
                "State context dropped, discarding update for {}",
                type_name::<T>()
            );
        }
    }
}
