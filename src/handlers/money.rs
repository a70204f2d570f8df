// Money handlers
// Endpoints for the money_usage table. Create and delete answer with a
// message instead of the raw statement result.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::{body_or_default, parse_id};
use crate::{
    error::{ApiError, ApiResult},
    models::CreateExpenseRequest,
    repository::SharedRepository,
    response::{success, ExpenseAdded, ExpenseDeleted},
};

pub const EXPENSE_NOT_FOUND: &str = "Expense not found.";

/// GET /money
pub async fn list_expenses(State(repo): State<SharedRepository>) -> ApiResult<impl IntoResponse> {
    info!("Fetching all expenses");

    let expenses = repo.list_expenses().await?;

    info!("Retrieved {} expenses", expenses.len());
    Ok(success(expenses))
}

/// POST /money
pub async fn create_expense(
    State(repo): State<SharedRepository>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let request = body_or_default(payload)?;
    let expense = request.validate().map_err(ApiError::Validation)?;

    info!("Adding expense {} ({})", expense.item, expense.cost);

    let id = repo.insert_expense(expense).await?;

    Ok(Json(ExpenseAdded::new(id)))
}

/// DELETE /money/:id
pub async fn delete_expense(
    State(repo): State<SharedRepository>,
    Path(raw_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    info!("Deleting expense {}", raw_id);

    let id = parse_id(&raw_id).ok_or_else(|| ApiError::not_found(EXPENSE_NOT_FOUND))?;

    if !repo.expense_exists(id).await? {
        return Err(ApiError::not_found(EXPENSE_NOT_FOUND));
    }

    repo.delete_expense(id).await?;

    Ok(Json(ExpenseDeleted::default()))
}
