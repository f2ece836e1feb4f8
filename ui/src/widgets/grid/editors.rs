//! Inline editors. Enter or leaving the field commits, Escape cancels.

use egui::{Id, Key, Stroke, StrokeKind, TextEdit, Ui};
use griddle_business::{CellRef, ColumnDescriptor, EditorKind, GridRow, GridState};

use super::GridAction;
use super::cells::anchor_of;
use crate::utils::colors::COLOR_RED;

pub fn editor<R: GridRow>(
    ui: &mut Ui,
    grid: &mut GridState<R>,
    column: &ColumnDescriptor,
    cell: CellRef,
    actions: &mut Vec<GridAction>,
) {
    let rect = ui.max_rect();
    let Some(session) = grid.editing_mut() else {
        return;
    };
    session.anchor = anchor_of(rect);

    match column.editor {
        EditorKind::Select(options) => {
            let mut picked = None;
            egui::ComboBox::from_id_salt(("grid-select", cell.row_id, cell.field.as_str()))
                .selected_text(session.buffer.as_str())
                .width(rect.width())
                .show_ui(ui, |ui| {
                    for option in options {
                        if ui
                            .selectable_label(session.buffer == *option, *option)
                            .clicked()
                        {
                            picked = Some(*option);
                        }
                    }
                });

            if let Some(option) = picked {
                session.buffer = option.to_owned();
                actions.push(GridAction::Commit);
            } else if ui.input(|input| input.key_pressed(Key::Escape)) {
                actions.push(GridAction::Cancel);
            }
        }
        EditorKind::Text | EditorKind::Number | EditorKind::Date | EditorKind::Checkbox => {
            let hint = match column.editor {
                EditorKind::Date => "YYYY-MM-DD",
                EditorKind::Number => "0",
                _ => "",
            };
            let response = ui.add(
                TextEdit::singleline(&mut session.buffer)
                    .id(Id::new(("grid-editor", cell.row_id, cell.field.as_str())))
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            );

            if response.lost_focus() {
                if ui.input(|input| input.key_pressed(Key::Escape)) {
                    actions.push(GridAction::Cancel);
                } else {
                    actions.push(GridAction::Commit);
                }
            } else if !response.has_focus() {
                response.request_focus();
            }
        }
    }

    if session.rejected {
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.5, COLOR_RED), StrokeKind::Inside);
    }
}
