//! Read-only cell rendering: plain text, hover icons and the pencil hint.

use egui::{Button, Checkbox, Label, Rect, Response, RichText, Sense, Ui};
use griddle_business::{
    CellRef, CellValue, ColumnDescriptor, EditorKind, GridRow, GridState, HoverIconConfig,
    IconKind, IconPosition, RendererKind, ScreenAnchor,
};

use super::GridAction;
use crate::utils::colors::{COLOR_MUTED, tint};

/// Width reserved for a hidden hover icon so the text does not jump.
const ICON_SLOT: f32 = 18.0;

pub fn glyph(icon: &IconKind) -> &str {
    match icon {
        IconKind::Edit => "✏",
        IconKind::Info => "ℹ",
        IconKind::Delete => "🗑",
        IconKind::Custom(glyph) => glyph.as_str(),
    }
}

/// Toast anchor of a cell: its bottom-left corner.
pub fn anchor_of(rect: Rect) -> ScreenAnchor {
    let point = rect.left_bottom();
    ScreenAnchor::new(point.x, point.y)
}

pub fn cell<R: GridRow>(
    ui: &mut Ui,
    grid: &mut GridState<R>,
    column: &ColumnDescriptor,
    cell: CellRef,
    actions: &mut Vec<GridAction>,
) {
    let rect = ui.max_rect();
    let hovered = ui.rect_contains_pointer(rect);
    let value = grid.value(cell).unwrap_or_default();

    if matches!(column.editor, EditorKind::Checkbox) {
        checkbox_cell(ui, grid.can_edit(cell), &value, cell, rect, actions);
        return;
    }

    match &column.renderer {
        RendererKind::HoverIcon(config) => {
            hover_icon_cell(ui, grid, column, config, cell, hovered, actions);
        }
        RendererKind::PencilOnHover => {
            let response = value_label(ui, &column.format_value(&value));
            if hovered && grid.can_edit(cell) {
                ui.label(RichText::new(glyph(&IconKind::Edit)).color(COLOR_MUTED));
            }
            edit_trigger(&response, column, cell, actions);
        }
        RendererKind::Plain => {
            let response = value_label(ui, &column.format_value(&value));
            edit_trigger(&response, column, cell, actions);
        }
    }
}

fn value_label(ui: &mut Ui, text: &str) -> Response {
    ui.add(Label::new(text).truncate().sense(Sense::click()))
}

fn edit_trigger(
    response: &Response,
    column: &ColumnDescriptor,
    cell: CellRef,
    actions: &mut Vec<GridAction>,
) {
    let wants_edit = if column.single_click_edit {
        response.clicked()
    } else {
        response.double_clicked()
    };
    if column.editable && wants_edit {
        actions.push(GridAction::StartEdit(cell));
    }
}

fn checkbox_cell(
    ui: &mut Ui,
    enabled: bool,
    value: &CellValue,
    cell: CellRef,
    rect: Rect,
    actions: &mut Vec<GridAction>,
) {
    let mut checked = matches!(value, CellValue::Bool(true));
    if ui
        .add_enabled(enabled, Checkbox::without_text(&mut checked))
        .changed()
    {
        actions.push(GridAction::SetValue {
            cell,
            raw: checked.to_string(),
            anchor: anchor_of(rect),
        });
    }
}

fn hover_icon_cell<R: GridRow>(
    ui: &mut Ui,
    grid: &mut GridState<R>,
    column: &ColumnDescriptor,
    config: &HoverIconConfig,
    cell: CellRef,
    hovered: bool,
    actions: &mut Vec<GridAction>,
) {
    let icon_tint = grid.icon_tint(cell).map(tint);
    let renderer = grid.renderer_mut(cell);
    renderer.set_hovered(hovered);
    let show_icon = renderer.should_show_icon(config);
    let text = column.format_value(renderer.value());

    match config.icon_position {
        IconPosition::Left => {
            icon_slot(ui, config, show_icon, icon_tint, cell, actions);
            let response = value_label(ui, &text);
            edit_trigger(&response, column, cell, actions);
        }
        IconPosition::Right => {
            let response = value_label(ui, &text);
            edit_trigger(&response, column, cell, actions);
            icon_slot(ui, config, show_icon, icon_tint, cell, actions);
        }
    }
}

fn icon_slot(
    ui: &mut Ui,
    config: &HoverIconConfig,
    show_icon: bool,
    tint: Option<egui::Color32>,
    cell: CellRef,
    actions: &mut Vec<GridAction>,
) {
    if !show_icon {
        ui.add_space(ICON_SLOT);
        return;
    }

    let icon = config.icon();
    let mut text = RichText::new(glyph(&icon));
    if let Some(tint) = tint {
        text = text.color(tint);
    }
    if ui
        .add(Button::new(text).frame(false))
        .on_hover_text(format!("{:?}", config.action))
        .clicked()
    {
        actions.push(GridAction::ActivateIcon(cell));
    }
}
