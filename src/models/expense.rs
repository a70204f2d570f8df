use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ITEM_REQUIRED: &str = "Item is required.";
pub const COST_INVALID: &str = "Cost must be a positive number.";

/// A row of the `money_usage` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    pub id: i32,
    pub item: String,
    pub cost: f64,
}

/// Request body for `POST /money`
#[derive(Debug, Default, Deserialize)]
pub struct CreateExpenseRequest {
    #[serde(default)]
    pub item: Option<Value>,
    #[serde(default)]
    pub cost: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub item: String,
    pub cost: f64,
}

impl CreateExpenseRequest {
    /// Validate the request and produce the row to insert
    pub fn validate(&self) -> Result<NewExpense, String> {
        let item = super::required_text(self.item.as_ref())
            .ok_or_else(|| ITEM_REQUIRED.to_string())?;
        let cost = super::positive_number(self.cost.as_ref())
            .ok_or_else(|| COST_INVALID.to_string())?;

        Ok(NewExpense { item, cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateExpenseRequest {
        serde_json::from_value(body).expect("Failed to deserialize CreateExpenseRequest")
    }

    #[test]
    fn test_create_expense_request_validation() {
        let expense = request(json!({"item": " Rent ", "cost": 12.5})).validate().unwrap();
        assert_eq!(expense, NewExpense { item: "Rent".to_string(), cost: 12.5 });

        let expense = request(json!({"item": "Gas", "cost": "40"})).validate().unwrap();
        assert_eq!(expense.cost, 40.0);
    }

    #[test]
    fn test_create_expense_request_errors() {
        assert_eq!(request(json!({"cost": 1})).validate().unwrap_err(), ITEM_REQUIRED);
        assert_eq!(
            request(json!({"item": "  ", "cost": 1})).validate().unwrap_err(),
            ITEM_REQUIRED
        );

        for cost in [json!(0), json!(-2.5), json!("free"), json!(null)] {
            let err = request(json!({"item": "Rent", "cost": cost})).validate().unwrap_err();
            assert_eq!(err, COST_INVALID);
        }
    }
}
