use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

/// Future returned by [`Command::run`].
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Explicit, manually dispatched side effect.
///
/// Commands never run implicitly. The UI dispatches them with
/// `ctx.dispatch::<C>()`; they receive an owned snapshot of every snapshot-able
/// state and compute, and publish results through the `Updater`.
pub trait Command: Any {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
