use serde::{Deserialize, Serialize};

use crate::row::{expect_bool, expect_number, expect_text, read_only, unknown};
use crate::{CellValue, GridRow, RowError, RowId};

/// A row of `/api/cars`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: RowId,
    pub make: String,
    pub model: String,
    /// Some inventory entries have no list price yet.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub electric: bool,
}

impl GridRow for Car {
    const RESOURCE: &'static str = "cars";

    fn id(&self) -> RowId {
        self.id
    }

    fn get(&self, field: &str) -> Option<CellValue> {
        Some(match field {
            "id" => CellValue::Number(self.id.0 as f64),
            "make" => CellValue::Text(self.make.clone()),
            "model" => CellValue::Text(self.model.clone()),
            "price" => self.price.map_or(CellValue::Empty, CellValue::Number),
            "electric" => CellValue::Bool(self.electric),
            _ => return None,
        })
    }

    fn set(&mut self, field: &str, value: CellValue) -> Result<(), RowError> {
        match field {
            "id" => return Err(read_only(field)),
            "make" => self.make = expect_text(field, value)?,
            "model" => self.model = expect_text(field, value)?,
            "price" => {
                self.price = match value {
                    CellValue::Empty => None,
                    value => Some(expect_number(field, value)?),
                }
            }
            "electric" => self.electric = expect_bool(field, value)?,
            _ => return Err(unknown(field)),
        }
        Ok(())
    }
}
