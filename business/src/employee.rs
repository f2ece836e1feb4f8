use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::row::{expect_date, expect_number, expect_text, read_only, unknown};
use crate::{CellValue, GridRow, RowError, RowId};

/// A row of `/api/employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RowId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub start_date: NaiveDate,
    pub email: String,
}

impl GridRow for Employee {
    const RESOURCE: &'static str = "employees";

    fn id(&self) -> RowId {
        self.id
    }

    fn get(&self, field: &str) -> Option<CellValue> {
        Some(match field {
            "id" => CellValue::Number(self.id.0 as f64),
            "name" => CellValue::Text(self.name.clone()),
            "position" => CellValue::Text(self.position.clone()),
            "department" => CellValue::Text(self.department.clone()),
            "salary" => CellValue::Number(self.salary),
            "startDate" => CellValue::Date(self.start_date),
            "email" => CellValue::Text(self.email.clone()),
            _ => return None,
        })
    }

    fn set(&mut self, field: &str, value: CellValue) -> Result<(), RowError> {
        match field {
            "id" => return Err(read_only(field)),
            "name" => self.name = expect_text(field, value)?,
            "position" => self.position = expect_text(field, value)?,
            "department" => self.department = expect_text(field, value)?,
            "salary" => self.salary = expect_number(field, value)?,
            "startDate" => self.start_date = expect_date(field, value)?,
            "email" => self.email = expect_text(field, value)?,
            _ => return Err(unknown(field)),
        }
        Ok(())
    }
}
