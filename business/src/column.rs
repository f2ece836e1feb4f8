//! Column descriptors.
//!
//! Columns are plain data: renderer, editor, formatting, validation and permission
//! behavior are all named kinds or strategy ids, resolved when the grid renders.

use bon::Builder;
use thiserror::Error;
use ustr::Ustr;

use crate::capabilities::{EDIT_ALLOWED, StrategyId};
use crate::renderer::{HoverIconConfig, IconPosition};
use crate::{CellValue, FormatKind, ValidationKind, ValueKind};

pub const CAR_MAKES: &[&str] = &["Tesla", "Ford", "Toyota", "BMW", "Mercedes-Benz", "Audi"];

pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Sales",
    "Human Resources",
    "IT",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorKind {
    #[default]
    Text,
    Number,
    /// Pick one of a fixed list of values.
    Select(&'static [&'static str]),
    Checkbox,
    Date,
}

impl EditorKind {
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::Text | Self::Select(_) => ValueKind::Text,
            Self::Number => ValueKind::Number,
            Self::Checkbox => ValueKind::Bool,
            Self::Date => ValueKind::Date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RendererKind {
    #[default]
    Plain,
    HoverIcon(HoverIconConfig),
    /// A display-only pencil while the pointer is over the cell.
    PencilOnHover,
}

#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ColumnDescriptor {
    #[builder(into)]
    pub field: Ustr,
    #[builder(into)]
    pub display_name: String,
    #[builder(default)]
    pub editable: bool,
    /// Start editing on a single click instead of a double click.
    #[builder(default)]
    pub single_click_edit: bool,
    #[builder(default = 1.0)]
    pub flex: f32,
    /// Render the row selection checkbox inside this column.
    #[builder(default)]
    pub checkbox_selection: bool,
    #[builder(default)]
    pub renderer: RendererKind,
    #[builder(default)]
    pub editor: EditorKind,
    #[builder(default)]
    pub format: FormatKind,
    #[builder(default)]
    pub validation: ValidationKind,
    /// Gates inline editing; the cell stays read-only when the strategy refuses.
    #[builder(into)]
    pub permission: Option<StrategyId>,
}

impl ColumnDescriptor {
    pub fn format_value(&self, value: &CellValue) -> String {
        self.format.format(value)
    }

    pub fn hover_icon(&self) -> Option<&HoverIconConfig> {
        match &self.renderer {
            RendererKind::HoverIcon(config) => Some(config),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    #[error("duplicate column field `{0}`")]
    DuplicateField(Ustr),
}

/// Ordered columns of one grid; fields are unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnSet {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnSet {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Result<Self, ColumnError> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.field == column.field) {
                return Err(ColumnError::DuplicateField(column.field));
            }
        }
        Ok(Self { columns })
    }

    pub fn get(&self, field: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn cars() -> Self {
        Self {
            columns: vec![
                ColumnDescriptor::builder()
                    .field("make")
                    .display_name("Company Make")
                    .editable(true)
                    .permission(EDIT_ALLOWED)
                    .checkbox_selection(true)
                    .editor(EditorKind::Select(CAR_MAKES))
                    .validation(ValidationKind::NonEmpty)
                    .build(),
                ColumnDescriptor::builder()
                    .field("model")
                    .display_name("Model")
                    .editable(true)
                    .permission(EDIT_ALLOWED)
                    .flex(1.5)
                    .validation(ValidationKind::NonEmpty)
                    .build(),
                ColumnDescriptor::builder()
                    .field("price")
                    .display_name("Price")
                    .editable(true)
                    .permission(EDIT_ALLOWED)
                    .editor(EditorKind::Number)
                    .format(FormatKind::CurrencyOrBlank)
                    .build(),
                ColumnDescriptor::builder()
                    .field("electric")
                    .display_name("Electric")
                    .editable(true)
                    .permission(EDIT_ALLOWED)
                    .editor(EditorKind::Checkbox)
                    .build(),
            ],
        }
    }

    pub fn employees() -> Self {
        Self {
            columns: vec![
                ColumnDescriptor::builder()
                    .field("id")
                    .display_name("ID")
                    .flex(0.5)
                    .checkbox_selection(true)
                    .editor(EditorKind::Number)
                    .build(),
                ColumnDescriptor::builder()
                    .field("name")
                    .display_name("Employee Name")
                    .editable(true)
                    .permission(EDIT_ALLOWED)
                    .flex(1.5)
                    .renderer(RendererKind::HoverIcon(
                        HoverIconConfig::builder()
                            .icon_position(IconPosition::Right)
                            .permission(EDIT_ALLOWED)
                            .build(),
                    ))
                    .validation(ValidationKind::UniqueNonEmpty)
                    .build(),
                ColumnDescriptor::builder()
                    .field("position")
                    .display_name("Position")
                    .editable(true)
                    .permission(EDIT_ALLOWED)
                    .single_click_edit(true)
                    .renderer(RendererKind::PencilOnHover)
                    .validation(ValidationKind::NonEmpty)
                    .build(),
                ColumnDescriptor::builder()
                    .field("department")
                    .display_name("Department")
                    .editable(true)
                    .permission(EDIT_ALLOWED)
                    .editor(EditorKind::Select(DEPARTMENTS))
                    .validation(ValidationKind::NonEmpty)
                    .build(),
                ColumnDescriptor::builder()
                    .field("salary")
                    .display_name("Salary")
                    .editor(EditorKind::Number)
                    .format(FormatKind::Currency)
                    .build(),
                ColumnDescriptor::builder()
                    .field("startDate")
                    .display_name("Start Date")
                    .editor(EditorKind::Date)
                    .build(),
                ColumnDescriptor::builder()
                    .field("email")
                    .display_name("Email")
                    .editable(true)
                    .permission(EDIT_ALLOWED)
                    .flex(1.5)
                    .renderer(RendererKind::HoverIcon(
                        HoverIconConfig::builder()
                            .icon_position(IconPosition::Left)
                            .permission(EDIT_ALLOWED)
                            .build(),
                    ))
                    .validation(ValidationKind::UniqueNonEmpty)
                    .build(),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a ColumnDescriptor;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_field_rejected() {
        let column = ColumnDescriptor::builder()
            .field("name")
            .display_name("Name")
            .build();
        let err = ColumnSet::new(vec![column.clone(), column]).unwrap_err();
        assert_eq!(err, ColumnError::DuplicateField(Ustr::from("name")));
    }

    #[test]
    fn presets_have_unique_fields() {
        for preset in [ColumnSet::cars(), ColumnSet::employees()] {
            assert!(ColumnSet::new(preset.iter().cloned().collect()).is_ok());
        }
    }

    #[test]
    fn builder_defaults() {
        let column = ColumnDescriptor::builder()
            .field("model")
            .display_name("Model")
            .build();
        assert!(!column.editable);
        assert_eq!(column.flex, 1.0);
        assert_eq!(column.editor, EditorKind::Text);
        assert_eq!(column.renderer, RendererKind::Plain);
        assert_eq!(column.validation, ValidationKind::None);
    }

    #[test]
    fn employee_hover_icons_sit_on_opposite_sides() {
        let columns = ColumnSet::employees();
        let name = columns.get("name").and_then(ColumnDescriptor::hover_icon).unwrap();
        let email = columns.get("email").and_then(ColumnDescriptor::hover_icon).unwrap();

        assert_eq!(name.icon_position, IconPosition::Right);
        assert_eq!(email.icon_position, IconPosition::Left);
        assert!(name.show_icon_on_hover);
        assert!(columns.get("position").unwrap().single_click_edit);
        assert!(!columns.get("salary").unwrap().editable);
    }

    #[test]
    fn salary_formats_as_currency() {
        let columns = ColumnSet::employees();
        let salary = columns.get("salary").unwrap();
        assert_eq!(salary.format_value(&CellValue::Number(85000.0)), "$85,000");
    }

    #[test]
    fn zero_price_renders_blank_zero_salary_does_not() {
        let cars = ColumnSet::cars();
        let price = cars.get("price").unwrap();
        assert_eq!(price.format_value(&CellValue::Number(0.0)), "");
        assert_eq!(price.format_value(&CellValue::Number(44990.0)), "$44,990");

        let employees = ColumnSet::employees();
        let salary = employees.get("salary").unwrap();
        assert_eq!(salary.format_value(&CellValue::Number(0.0)), "$0");
    }
}
