//! Row model shared by every grid.
//!
//! A resource row is a plain serde struct that also implements [`GridRow`], which
//! gives the grid field-level access by column name.

use std::fmt::{self, Debug, Display};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable row identifier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u64);

impl Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shape of a cell value, used to parse editor input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Bool,
    Date,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl CellValue {
    /// Parse raw editor text into a value of `kind`.
    ///
    /// Blank input parses to `Empty` for every kind except text; whether a blank
    /// value is acceptable is decided by the column's validation and the row.
    pub fn parse(kind: ValueKind, raw: &str) -> Result<Self, RowError> {
        let trimmed = raw.trim();
        let parse_error = || RowError::Parse {
            raw: raw.to_owned(),
            expected: kind,
        };

        match kind {
            ValueKind::Text => Ok(Self::Text(raw.to_owned())),
            _ if trimmed.is_empty() => Ok(Self::Empty),
            ValueKind::Number => trimmed
                .replace(['$', ','], "")
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Self::Number)
                .ok_or_else(parse_error),
            ValueKind::Bool => match trimmed.to_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Self::Bool(true)),
                "false" | "no" | "0" => Ok(Self::Bool(false)),
                _ => Err(parse_error()),
            },
            ValueKind::Date => NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .map(Self::Date)
                .map_err(|_| parse_error()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("unknown field `{field}`")]
    UnknownField { field: String },
    #[error("field `{field}` is read-only")]
    ReadOnly { field: String },
    #[error("field `{field}` expects a {expected:?} value")]
    TypeMismatch { field: String, expected: ValueKind },
    #[error("`{raw}` is not a valid {expected:?}")]
    Parse { raw: String, expected: ValueKind },
}

/// A row of one REST resource.
pub trait GridRow: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// URL segment under `/api`, e.g. `employees`.
    const RESOURCE: &'static str;

    fn id(&self) -> RowId;

    /// Value of `field`, `None` for unknown fields.
    fn get(&self, field: &str) -> Option<CellValue>;

    fn set(&mut self, field: &str, value: CellValue) -> Result<(), RowError>;
}

pub(crate) fn expect_text(field: &str, value: CellValue) -> Result<String, RowError> {
    match value {
        CellValue::Text(text) => Ok(text),
        CellValue::Empty => Ok(String::new()),
        _ => Err(mismatch(field, ValueKind::Text)),
    }
}

pub(crate) fn expect_number(field: &str, value: CellValue) -> Result<f64, RowError> {
    match value {
        CellValue::Number(n) => Ok(n),
        _ => Err(mismatch(field, ValueKind::Number)),
    }
}

pub(crate) fn expect_bool(field: &str, value: CellValue) -> Result<bool, RowError> {
    match value {
        CellValue::Bool(b) => Ok(b),
        _ => Err(mismatch(field, ValueKind::Bool)),
    }
}

pub(crate) fn expect_date(field: &str, value: CellValue) -> Result<NaiveDate, RowError> {
    match value {
        CellValue::Date(date) => Ok(date),
        _ => Err(mismatch(field, ValueKind::Date)),
    }
}

fn mismatch(field: &str, expected: ValueKind) -> RowError {
    RowError::TypeMismatch {
        field: field.to_owned(),
        expected,
    }
}

pub(crate) fn unknown(field: &str) -> RowError {
    RowError::UnknownField {
        field: field.to_owned(),
    }
}

pub(crate) fn read_only(field: &str) -> RowError {
    RowError::ReadOnly {
        field: field.to_owned(),
    }
}
