use griddle_business::ColumnDescriptor;

pub const MIN_COLUMN_WIDTH: f32 = 60.0;

/// Spacing egui_extras puts between columns.
const COLUMN_SPACING: f32 = 8.0;

/// Split `available` between the columns in proportion to their `flex`.
pub fn initial_widths(columns: &[ColumnDescriptor], available: f32) -> Vec<f32> {
    let total_flex: f32 = columns.iter().map(|column| column.flex.max(0.0)).sum();
    if total_flex <= 0.0 {
        return vec![MIN_COLUMN_WIDTH; columns.len()];
    }

    let spacing = COLUMN_SPACING * columns.len().saturating_sub(1) as f32;
    let usable = (available - spacing).max(0.0);
    columns
        .iter()
        .map(|column| (usable * column.flex.max(0.0) / total_flex).max(MIN_COLUMN_WIDTH))
        .collect()
}
