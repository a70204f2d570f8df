use async_trait::async_trait;
use deadpool_postgres::{Config, ManagerConfig, Object, Pool, PoolConfig, RecyclingMethod, Runtime, SslMode};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tracing::{error, info, warn};

use crate::config::DatabaseConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{DeleteResult, Expense, InsertResult, Item, ItemTable, NewExpense, NewItem};
use crate::repository::Repository;

/// Repository backed by a PostgreSQL connection pool.
///
/// Each operation borrows one connection for one statement and hands it
/// back when the statement completes.
#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    /// Build the pool and verify connectivity once.
    ///
    /// A failed probe is returned as an error; the caller is expected to
    /// treat it as fatal rather than start serving.
    pub async fn new(config: DatabaseConfig) -> ApiResult<Self> {
        info!(
            "Creating PostgreSQL connection pool for {}:{}/{} (max {} connections)",
            config.host, config.port, config.database, config.max_connections
        );

        let pool = Self::create_pool(config)?;

        let db = Database { pool };
        db.test_connection().await?;

        Ok(db)
    }

    fn create_pool(config: DatabaseConfig) -> ApiResult<Pool> {
        let mut pg_config = Config::new();

        pg_config.host = Some(config.host);
        pg_config.port = Some(config.port);
        pg_config.dbname = Some(config.database);
        pg_config.user = Some(config.username);
        pg_config.password = Some(config.password);

        pg_config.ssl_mode = Some(match config.ssl_mode.as_str() {
            "disable" => SslMode::Disable,
            "require" => SslMode::Require,
            "prefer" => SslMode::Prefer,
            other => {
                warn!("Unknown SSL mode '{}', defaulting to 'prefer'", other);
                SslMode::Prefer
            }
        });

        pg_config.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        pg_config.pool = Some(PoolConfig::new(config.max_connections));

        let tls_connector = TlsConnector::builder().build().map_err(|e| {
            error!("Failed to create TLS connector: {}", e);
            ApiError::Database(format!("TLS connector creation failed: {}", e))
        })?;
        let tls = MakeTlsConnector::new(tls_connector);

        pg_config
            .create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| {
                error!("Failed to create connection pool: {}", e);
                ApiError::Database(format!("Connection pool creation failed: {}", e))
            })
    }

    async fn get_connection(&self) -> ApiResult<Object> {
        self.pool.get().await.map_err(ApiError::from)
    }

    /// Run `SELECT 1` on a pooled connection
    pub async fn test_connection(&self) -> ApiResult<()> {
        let client = self.get_connection().await?;

        client.execute("SELECT 1", &[]).await.map_err(|e| {
            error!("Database connection test failed: {}", e);
            ApiError::from(e)
        })?;

        info!("Database connection test successful");
        Ok(())
    }

    /// Close the pool. Connections in use are dropped when returned.
    pub fn close(&self) {
        self.pool.close();
        info!("Database connection pool closed");
    }
}

#[async_trait]
impl Repository for Database {
    async fn list_items(&self, table: ItemTable) -> ApiResult<Vec<Item>> {
        let client = self.get_connection().await?;
        let query = format!("SELECT id, name, quantity FROM {} ORDER BY id", table);

        let rows = client.query(&query, &[]).await?;

        rows.iter()
            .map(|row| -> ApiResult<Item> {
                Ok(Item {
                    id: row.try_get(0)?,
                    name: row.try_get(1)?,
                    quantity: row.try_get(2)?,
                })
            })
            .collect()
    }

    async fn insert_item(&self, table: ItemTable, item: NewItem) -> ApiResult<InsertResult> {
        let client = self.get_connection().await?;
        let query = format!(
            "INSERT INTO {} (name, quantity) VALUES ($1, $2) RETURNING id",
            table
        );

        let row = client.query_one(&query, &[&item.name, &item.quantity]).await?;
        let insert_id: i32 = row.try_get(0)?;

        info!("Inserted row {} into {}", insert_id, table);
        Ok(InsertResult {
            insert_id,
            affected_rows: 1,
        })
    }

    async fn item_exists(&self, table: ItemTable, id: i32) -> ApiResult<bool> {
        let client = self.get_connection().await?;
        let query = format!("SELECT 1 FROM {} WHERE id = $1", table);

        Ok(client.query_opt(&query, &[&id]).await?.is_some())
    }

    async fn delete_item(&self, table: ItemTable, id: i32) -> ApiResult<DeleteResult> {
        let client = self.get_connection().await?;
        let query = format!("DELETE FROM {} WHERE id = $1", table);

        let affected_rows = client.execute(&query, &[&id]).await?;

        info!("Deleted row {} from {} ({} affected)", id, table, affected_rows);
        Ok(DeleteResult { affected_rows })
    }

    async fn list_expenses(&self) -> ApiResult<Vec<Expense>> {
        let client = self.get_connection().await?;

        let rows = client
            .query(
                "SELECT id, item, cost::float8 FROM money_usage ORDER BY id",
                &[],
            )
            .await?;

        rows.iter()
            .map(|row| -> ApiResult<Expense> {
                Ok(Expense {
                    id: row.try_get(0)?,
                    item: row.try_get(1)?,
                    cost: row.try_get(2)?,
                })
            })
            .collect()
    }

    async fn insert_expense(&self, expense: NewExpense) -> ApiResult<i32> {
        let client = self.get_connection().await?;

        let row = client
            .query_one(
                "INSERT INTO money_usage (item, cost) VALUES ($1, $2::float8) RETURNING id",
                &[&expense.item, &expense.cost],
            )
            .await?;
        let id: i32 = row.try_get(0)?;

        info!("Inserted expense {}", id);
        Ok(id)
    }

    async fn expense_exists(&self, id: i32) -> ApiResult<bool> {
        let client = self.get_connection().await?;

        Ok(client
            .query_opt("SELECT 1 FROM money_usage WHERE id = $1", &[&id])
            .await?
            .is_some())
    }

    async fn delete_expense(&self, id: i32) -> ApiResult<DeleteResult> {
        let client = self.get_connection().await?;

        let affected_rows = client
            .execute("DELETE FROM money_usage WHERE id = $1", &[&id])
            .await?;

        info!("Deleted expense {} ({} affected)", id, affected_rows);
        Ok(DeleteResult { affected_rows })
    }
}
