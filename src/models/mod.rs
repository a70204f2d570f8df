// Models module

pub mod expense;
pub mod item;
pub mod table;

use serde_json::Value;

// Re-export commonly used types
pub use expense::{CreateExpenseRequest, Expense, NewExpense};
pub use item::{CreateItemRequest, DeleteResult, InsertResult, Item, NewItem};
pub use table::ItemTable;

/// Accepts only a JSON string that still has content after trimming.
/// Returns the trimmed text.
pub(crate) fn required_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
}

/// Accepts a JSON number or a numeric string greater than zero.
pub(crate) fn positive_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    (number.is_finite() && number > 0.0).then_some(number)
}
