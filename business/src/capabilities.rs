//! Named strategies referenced from column descriptors.
//!
//! Columns only carry a [`StrategyId`]; the behavior behind it is registered in a
//! [`Capabilities`] set owned by the grid. This keeps column configuration plain
//! data, and lets tests swap the behavior without touching rendering.

use std::collections::HashMap;
use std::fmt;

use ustr::Ustr;

use crate::{CellValue, GridRow, RowId};

pub type StrategyId = Ustr;

/// Permits hover-icon actions unless the app runs read-only.
pub const EDIT_ALLOWED: &str = "edit.allowed";

/// Everything a strategy may look at for one cell.
#[derive(Debug)]
pub struct RenderContext<'a, R> {
    pub row: &'a R,
    pub row_id: RowId,
    pub field: Ustr,
    pub value: &'a CellValue,
}

pub trait PermissionPredicate<R>: Send + Sync {
    fn permits(&self, ctx: &RenderContext<'_, R>) -> bool;
}

impl<R, F> PermissionPredicate<R> for F
where
    F: Fn(&RenderContext<'_, R>) -> bool + Send + Sync,
{
    fn permits(&self, ctx: &RenderContext<'_, R>) -> bool {
        self(ctx)
    }
}

pub trait ActionHandler<R>: Send + Sync {
    fn handle(&self, ctx: &RenderContext<'_, R>);
}

impl<R, F> ActionHandler<R> for F
where
    F: Fn(&RenderContext<'_, R>) + Send + Sync,
{
    fn handle(&self, ctx: &RenderContext<'_, R>) {
        self(ctx);
    }
}

pub struct Capabilities<R> {
    permissions: HashMap<StrategyId, Box<dyn PermissionPredicate<R>>>,
    handlers: HashMap<StrategyId, Box<dyn ActionHandler<R>>>,
}

impl<R> Default for Capabilities<R> {
    fn default() -> Self {
        Self {
            permissions: HashMap::new(),
            handlers: HashMap::new(),
        }
    }
}

impl<R> fmt::Debug for Capabilities<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("permissions", &self.permissions.keys().collect::<Vec<_>>())
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<R: GridRow> Capabilities<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capabilities every grid registers.
    pub fn standard(read_only: bool) -> Self {
        Self::new().with_permission(EDIT_ALLOWED, move |_: &RenderContext<'_, R>| !read_only)
    }

    pub fn with_permission(
        mut self,
        id: impl Into<StrategyId>,
        predicate: impl PermissionPredicate<R> + 'static,
    ) -> Self {
        self.permissions.insert(id.into(), Box::new(predicate));
        self
    }

    pub fn with_handler(
        mut self,
        id: impl Into<StrategyId>,
        handler: impl ActionHandler<R> + 'static,
    ) -> Self {
        self.handlers.insert(id.into(), Box::new(handler));
        self
    }

    /// Unknown or absent strategies permit.
    pub fn permits(&self, id: Option<StrategyId>, ctx: &RenderContext<'_, R>) -> bool {
        id.and_then(|id| self.permissions.get(&id))
            .is_none_or(|predicate| predicate.permits(ctx))
    }

    pub fn handler(&self, id: StrategyId) -> Option<&dyn ActionHandler<R>> {
        self.handlers.get(&id).map(|handler| handler.as_ref())
    }
}
