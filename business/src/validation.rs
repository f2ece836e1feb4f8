//! Edit-commit validation.
//!
//! Runs synchronously before the grid commits an edit. Cross-row checks compare
//! against the other rows of the collection by id, never against the edited row.

use thiserror::Error;

use crate::{GridRow, RowError, RowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationKind {
    #[default]
    None,
    NonEmpty,
    /// Non-empty and unique among the other rows, ignoring case and surrounding whitespace.
    UniqueNonEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value cannot be empty")]
    Empty,
    #[error("duplicate: already exists")]
    Duplicate,
    #[error("{0}")]
    Invalid(String),
}

impl From<RowError> for ValidationError {
    fn from(err: RowError) -> Self {
        Self::Invalid(err.to_string())
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn validate<R: GridRow>(
    rule: ValidationKind,
    candidate: &str,
    rows: &[R],
    editing: RowId,
    field: &str,
) -> Result<(), ValidationError> {
    if rule == ValidationKind::None {
        return Ok(());
    }

    if candidate.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    if rule == ValidationKind::UniqueNonEmpty {
        let wanted = normalize(candidate);
        let duplicate = rows
            .iter()
            .filter(|row| row.id() != editing)
            .filter_map(|row| row.get(field))
            .any(|value| normalize(&value.to_string()) == wanted);

        if duplicate {
            return Err(ValidationError::Duplicate);
        }
    }

    Ok(())
}
