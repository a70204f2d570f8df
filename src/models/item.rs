use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const QUANTITY_INVALID: &str = "Quantity must be a positive number.";

/// A row of one of the item tables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
}

/// Request body for `POST /<table>`.
///
/// Fields are kept as raw JSON so that a missing field, a wrong type and a
/// bad value all surface as the same validation message.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
}

/// Validated, normalized item ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: i32,
}

impl CreateItemRequest {
    /// Validate the request and produce the row to insert.
    /// The name is checked before the quantity.
    pub fn validate(&self) -> Result<NewItem, String> {
        let name = super::required_text(self.name.as_ref())
            .ok_or_else(|| NAME_REQUIRED.to_string())?;

        let quantity = super::positive_number(self.quantity.as_ref())
            .filter(|q| q.fract() == 0.0 && *q <= f64::from(i32::MAX))
            .map(|q| q as i32)
            .ok_or_else(|| QUANTITY_INVALID.to_string())?;

        Ok(NewItem { name, quantity })
    }
}

/// Outcome of an INSERT, returned verbatim under `data`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub insert_id: i32,
    pub affected_rows: u64,
}

/// Outcome of a DELETE, returned verbatim under `data`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub affected_rows: u64,
}
