//! Hover-icon cell renderer.
//!
//! Each rendered cell owns a small state machine (`Idle` / `Hovering`) and shows
//! an action icon next to its value. Activating the icon resolves, in order:
//! the permission strategy, the caller-supplied handler strategy, then the
//! built-in [`CellAction`].

use bon::Builder;
use log::{info, warn};

use crate::capabilities::{Capabilities, RenderContext, StrategyId};
use crate::{CellRef, CellValue, GridRow, RowId};

/// Icon tint when the action is permitted (`#3b82f6`).
pub const ICON_COLOR_PERMITTED: [u8; 3] = [0x3b, 0x82, 0xf6];
/// Icon tint when the permission strategy refuses (`#9ca3af`).
pub const ICON_COLOR_DENIED: [u8; 3] = [0x9c, 0xa3, 0xaf];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IconKind {
    #[default]
    Edit,
    Info,
    Delete,
    /// Glyph drawn as-is.
    Custom(StrategyId),
}

/// Built-in action bound to the icon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellAction {
    /// Start editing this exact cell.
    #[default]
    Edit,
    /// Show the row details.
    Info,
    /// Presentation only: reported to the caller, nothing is deleted.
    Delete,
    Custom(StrategyId),
}

impl CellAction {
    pub fn default_icon(&self) -> IconKind {
        match self {
            Self::Edit => IconKind::Edit,
            Self::Info => IconKind::Info,
            Self::Delete => IconKind::Delete,
            Self::Custom(id) => IconKind::Custom(*id),
        }
    }
}

/// What activating an icon resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Permission strategy refused; nothing else ran.
    Denied,
    /// A registered handler strategy consumed the activation.
    Handled(StrategyId),
    StartEditing(CellRef),
    ShowInfo(RowId),
    RequestDelete(RowId),
    Custom { row_id: RowId, action: StrategyId },
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct HoverIconConfig {
    #[builder(default)]
    pub action: CellAction,
    /// Defaults to the action's icon.
    pub icon: Option<IconKind>,
    #[builder(default)]
    pub icon_position: IconPosition,
    /// When false the icon is always shown.
    #[builder(default = true)]
    pub show_icon_on_hover: bool,
    #[builder(into)]
    pub on_action: Option<StrategyId>,
    #[builder(into)]
    pub permission: Option<StrategyId>,
}

impl Default for HoverIconConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HoverIconConfig {
    pub fn icon(&self) -> IconKind {
        self.icon.clone().unwrap_or_else(|| self.action.default_icon())
    }

    pub fn is_permitted<R: GridRow>(
        &self,
        ctx: &RenderContext<'_, R>,
        caps: &Capabilities<R>,
    ) -> bool {
        caps.permits(self.permission, ctx)
    }

    pub fn icon_tint<R: GridRow>(
        &self,
        ctx: &RenderContext<'_, R>,
        caps: &Capabilities<R>,
    ) -> [u8; 3] {
        if self.is_permitted(ctx, caps) {
            ICON_COLOR_PERMITTED
        } else {
            ICON_COLOR_DENIED
        }
    }

    pub fn activate<R: GridRow>(
        &self,
        ctx: &RenderContext<'_, R>,
        caps: &Capabilities<R>,
    ) -> ActionOutcome {
        if !self.is_permitted(ctx, caps) {
            warn!("Action not permitted on row {} field {}", ctx.row_id, ctx.field);
            return ActionOutcome::Denied;
        }

        if let Some(id) = self.on_action {
            match caps.handler(id) {
                Some(handler) => {
                    handler.handle(ctx);
                    return ActionOutcome::Handled(id);
                }
                None => warn!("No action handler registered for `{id}`, using built-in action"),
            }
        }

        match &self.action {
            CellAction::Edit => ActionOutcome::StartEditing(CellRef::new(ctx.row_id, ctx.field)),
            CellAction::Info => {
                info!("Info clicked for row {}", ctx.row_id);
                ActionOutcome::ShowInfo(ctx.row_id)
            }
            CellAction::Delete => {
                info!("Delete clicked for row {}", ctx.row_id);
                ActionOutcome::RequestDelete(ctx.row_id)
            }
            CellAction::Custom(action) => {
                info!("Custom action `{action}` for row {}", ctx.row_id);
                ActionOutcome::Custom {
                    row_id: ctx.row_id,
                    action: *action,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering,
}

/// Per-cell renderer state.
#[derive(Debug, Clone, Default)]
pub struct HoverIconRenderer {
    state: HoverState,
    value: CellValue,
}

impl HoverIconRenderer {
    pub fn new(value: CellValue) -> Self {
        Self {
            state: HoverState::Idle,
            value,
        }
    }

    pub fn pointer_enter(&mut self) {
        self.state = HoverState::Hovering;
    }

    pub fn pointer_leave(&mut self) {
        self.state = HoverState::Idle;
    }

    /// Feed the current frame's hover flag; fires enter/leave on change.
    pub fn set_hovered(&mut self, hovered: bool) {
        match (self.state, hovered) {
            (HoverState::Idle, true) => self.pointer_enter(),
            (HoverState::Hovering, false) => self.pointer_leave(),
            _ => {}
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn is_hovering(&self) -> bool {
        self.state == HoverState::Hovering
    }

    pub fn should_show_icon(&self, config: &HoverIconConfig) -> bool {
        !config.show_icon_on_hover || self.is_hovering()
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Take an externally changed value; hover state is kept.
    pub fn refresh(&mut self, value: CellValue) {
        self.value = value;
    }
}
