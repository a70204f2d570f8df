// Repository seam
// Handlers talk to storage only through this trait.

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    error::ApiResult,
    models::{DeleteResult, Expense, InsertResult, Item, ItemTable, NewExpense, NewItem},
};

/// Storage operations behind the HTTP handlers.
///
/// Every method is a single statement against the store. Callers that need
/// "check, then act" issue two calls; nothing here spans them.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn list_items(&self, table: ItemTable) -> ApiResult<Vec<Item>>;

    async fn insert_item(&self, table: ItemTable, item: NewItem) -> ApiResult<InsertResult>;

    async fn item_exists(&self, table: ItemTable, id: i32) -> ApiResult<bool>;

    async fn delete_item(&self, table: ItemTable, id: i32) -> ApiResult<DeleteResult>;

    async fn list_expenses(&self) -> ApiResult<Vec<Expense>>;

    /// Returns the generated id
    async fn insert_expense(&self, expense: NewExpense) -> ApiResult<i32>;

    async fn expense_exists(&self, id: i32) -> ApiResult<bool>;

    async fn delete_expense(&self, id: i32) -> ApiResult<DeleteResult>;
}

/// Shared handle stored in the router state
pub type SharedRepository = Arc<dyn Repository>;
