// Success envelopes
// Every error goes through `ApiError`; these are the success shapes.

use axum::Json;
use serde::Serialize;

/// `{ "success": true, "data": ... }`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

pub fn success<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope { success: true, data })
}

/// Reply to `POST /money`
#[derive(Debug, Serialize)]
pub struct ExpenseAdded {
    pub success: bool,
    pub message: &'static str,
    pub id: i32,
}

impl ExpenseAdded {
    pub fn new(id: i32) -> Self {
        Self {
            success: true,
            message: "Expense added",
            id,
        }
    }
}

/// Reply to `DELETE /money/:id`
#[derive(Debug, Serialize)]
pub struct ExpenseDeleted {
    pub success: bool,
    pub message: &'static str,
}

impl Default for ExpenseDeleted {
    fn default() -> Self {
        Self {
            success: true,
            message: "Expense deleted",
        }
    }
}
