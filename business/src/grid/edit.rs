use ustr::Ustr;

use crate::notification::{NotificationId, ScreenAnchor};
use crate::{CellValue, RowId, ValidationError};

/// Address of one cell: the row by id and the column by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row_id: RowId,
    pub field: Ustr,
}

impl CellRef {
    pub fn new(row_id: RowId, field: impl Into<Ustr>) -> Self {
        Self {
            row_id,
            field: field.into(),
        }
    }
}

/// The cell currently being edited inline.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub cell: CellRef,
    /// Raw editor text.
    pub buffer: String,
    pub original: CellValue,
    /// Set when a blocked commit left the editor open.
    pub rejected: bool,
    /// Where a rejection notification is drawn; the UI keeps it at the cell.
    pub anchor: ScreenAnchor,
}

impl EditSession {
    pub(crate) fn new(cell: CellRef, original: CellValue) -> Self {
        Self {
            cell,
            buffer: original.to_string(),
            original,
            rejected: false,
            anchor: ScreenAnchor::default(),
        }
    }
}

/// Raised once per accepted commit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditEvent {
    pub row_id: RowId,
    pub field: Ustr,
    pub old_value: CellValue,
    pub new_value: CellValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome<R> {
    /// Nothing was being edited.
    NoSession,
    /// The parsed value equals the original one; nothing to write.
    Unchanged,
    /// The row was updated in place; `row` is the full updated row.
    Accepted { event: EditEvent, row: R },
    Rejected {
        error: ValidationError,
        notification: NotificationId,
        /// The row with the rejected value applied, only under
        /// `DispatchPolicy::EveryCommit`. The grid's own row is left untouched.
        bypass_row: Option<R>,
    },
}

impl<R> CommitOutcome<R> {
    /// Row to write back to the backend, if any.
    pub fn row_to_dispatch(&self) -> Option<&R> {
        match self {
            Self::Accepted { row, .. } => Some(row),
            Self::Rejected { bypass_row, .. } => bypass_row.as_ref(),
            Self::NoSession | Self::Unchanged => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
