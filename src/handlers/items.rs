// Item handlers
// One set of handlers shared by every `ItemTable`; the table comes from a
// route-level extension, never from the request.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Extension, Json,
};
use tracing::info;

use super::{body_or_default, parse_id};
use crate::{
    error::{ApiError, ApiResult},
    models::{CreateItemRequest, ItemTable},
    repository::SharedRepository,
    response::success,
};

pub const ITEM_NOT_FOUND: &str = "Item not found.";

/// List every row of the table
/// GET /<table>
pub async fn list_items(
    State(repo): State<SharedRepository>,
    Extension(table): Extension<ItemTable>,
) -> ApiResult<impl IntoResponse> {
    info!("Fetching all rows from {}", table);

    let items = repo.list_items(table).await?;

    info!("Retrieved {} rows from {}", items.len(), table);
    Ok(success(items))
}

/// Insert one row
/// POST /<table>
pub async fn create_item(
    State(repo): State<SharedRepository>,
    Extension(table): Extension<ItemTable>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let request = body_or_default(payload)?;
    let item = request.validate().map_err(ApiError::Validation)?;

    info!("Adding {} x{} to {}", item.name, item.quantity, table);

    let result = repo.insert_item(table, item).await?;

    Ok(success(result))
}

/// Delete one row by id
/// DELETE /<table>/:id
///
/// The existence check and the delete are separate statements. A concurrent
/// delete between them is not detected.
pub async fn delete_item(
    State(repo): State<SharedRepository>,
    Extension(table): Extension<ItemTable>,
    Path(raw_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    info!("Deleting row {} from {}", raw_id, table);

    let id = parse_id(&raw_id).ok_or_else(|| ApiError::not_found(ITEM_NOT_FOUND))?;

    if !repo.item_exists(table, id).await? {
        return Err(ApiError::not_found(ITEM_NOT_FOUND));
    }

    let result = repo.delete_item(table, id).await?;

    Ok(success(result))
}
