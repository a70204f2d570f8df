// In-memory repository used by the handler and router tests

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use super::Repository;
use crate::{
    error::{ApiError, ApiResult},
    models::{DeleteResult, Expense, InsertResult, Item, ItemTable, NewExpense, NewItem},
};

/// Rows keyed by id with a counter that only moves forward,
/// so deleted ids are never handed out again.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.insert(id, build(id));
        id
    }

    fn remove(&mut self, id: i32) -> DeleteResult {
        DeleteResult {
            affected_rows: u64::from(self.rows.remove(&id).is_some()),
        }
    }
}

#[derive(Default)]
struct State {
    items: HashMap<ItemTable, Table<Item>>,
    expenses: Table<Expense>,
    failure: Option<String>,
}

#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<State>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail as if the driver reported `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        self.state.lock().unwrap().failure = Some(message.into());
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut State) -> R) -> ApiResult<R> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.failure {
            return Err(ApiError::Database(message.clone()));
        }
        Ok(f(&mut state))
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn list_items(&self, table: ItemTable) -> ApiResult<Vec<Item>> {
        self.with_state(|state| {
            state
                .items
                .get(&table)
                .map(|t| t.rows.values().cloned().collect())
                .unwrap_or_default()
        })
    }

    async fn insert_item(&self, table: ItemTable, item: NewItem) -> ApiResult<InsertResult> {
        self.with_state(|state| {
            let insert_id = state.items.entry(table).or_default().insert_with(|id| Item {
                id,
                name: item.name,
                quantity: item.quantity,
            });
            InsertResult {
                insert_id,
                affected_rows: 1,
            }
        })
    }

    async fn item_exists(&self, table: ItemTable, id: i32) -> ApiResult<bool> {
        self.with_state(|state| {
            state
                .items
                .get(&table)
                .is_some_and(|t| t.rows.contains_key(&id))
        })
    }

    async fn delete_item(&self, table: ItemTable, id: i32) -> ApiResult<DeleteResult> {
        self.with_state(|state| state.items.entry(table).or_default().remove(id))
    }

    async fn list_expenses(&self) -> ApiResult<Vec<Expense>> {
        self.with_state(|state| state.expenses.rows.values().cloned().collect())
    }

    async fn insert_expense(&self, expense: NewExpense) -> ApiResult<i32> {
        self.with_state(|state| {
            state.expenses.insert_with(|id| Expense {
                id,
                item: expense.item,
                cost: expense.cost,
            })
        })
    }

    async fn expense_exists(&self, id: i32) -> ApiResult<bool> {
        self.with_state(|state| state.expenses.rows.contains_key(&id))
    }

    async fn delete_expense(&self, id: i32) -> ApiResult<DeleteResult> {
        self.with_state(|state| state.expenses.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> NewItem {
        NewItem {
            name: "Milk".to_string(),
            quantity: 2,
        }
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = MemoryRepository::new();
        let first = repo.insert_item(ItemTable::Groceries, milk()).await.unwrap();
        repo.delete_item(ItemTable::Groceries, first.insert_id).await.unwrap();
        let second = repo.insert_item(ItemTable::Groceries, milk()).await.unwrap();

        assert_eq!(first.insert_id, 1);
        assert_eq!(second.insert_id, 2);
    }

    #[tokio::test]
    async fn test_tables_are_independent() {
        let repo = MemoryRepository::new();
        repo.insert_item(ItemTable::Groceries, milk()).await.unwrap();

        assert_eq!(repo.list_items(ItemTable::Groceries).await.unwrap().len(), 1);
        assert!(repo.list_items(ItemTable::Electrical).await.unwrap().is_empty());
        assert!(!repo.item_exists(ItemTable::Monthlies, 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_fail_with() {
        let repo = MemoryRepository::new();
        repo.fail_with("connection refused");

        match repo.list_expenses().await {
            Err(ApiError::Database(message)) => assert_eq!(message, "connection refused"),
            other => panic!("unexpected result: {:?}", other.map(|rows| rows.len())),
        }
    }
}
