use std::any::Any;

/// A value stored in a [`StateCtx`](crate::StateCtx).
///
/// States live on the UI thread. A state that async commands need to read must
/// return a `Send` clone from [`State::snapshot`]; states holding UI handles keep
/// the default and are simply absent from command snapshots.
pub trait State: Any {
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// Object-safe view over any `State`, used for storage inside the runtime.
pub(crate) trait ErasedState: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn snapshot_boxed(&self) -> Option<Box<dyn Any + Send>>;

    /// Replace `self` with `new_self` if the types match.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) -> bool;
}

impl<T: State> ErasedState for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot_boxed(&self) -> Option<Box<dyn Any + Send>> {
        self.snapshot()
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) -> bool {
        match new_self.downcast::<T>() {
            Ok(value) => {
                *self = *value;
                true
            }
            Err(_) => false,
        }
    }
}
