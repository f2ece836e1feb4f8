use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Frame time.
///
/// The UI writes the wall clock into it once per frame; tests set it by hand so
/// time-based behavior (notification expiry) is deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { virt: now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }
}

impl State for Time {
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
