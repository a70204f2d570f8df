use axum::{
    http::HeaderValue,
    routing::{delete, get},
    Extension, Router,
};
use tower::ServiceBuilder;

use crate::{
    handlers::{items, method_not_allowed, money, route_not_found},
    middleware::{create_cors_layer, request_trace_layer},
    models::ItemTable,
    repository::SharedRepository,
};

/// Create the Axum router with all endpoints and middleware
pub fn create_router(repository: SharedRepository, cors_origin: HeaderValue) -> Router {
    let router = ItemTable::ALL
        .into_iter()
        .fold(Router::new(), |router, table| router.merge(item_routes(table)));

    router
        .merge(money_routes())
        .fallback(route_not_found)
        .with_state(repository)
        .layer(
            ServiceBuilder::new()
                .layer(request_trace_layer())
                .layer(create_cors_layer(cors_origin)),
        )
}

/// `/<table>` and `/<table>/:id`, with the table attached as an extension
fn item_routes(table: ItemTable) -> Router<SharedRepository> {
    Router::new()
        .route(
            &table.collection_path(),
            get(items::list_items)
                .post(items::create_item)
                .fallback(method_not_allowed),
        )
        .route(
            &table.member_path(),
            delete(items::delete_item).fallback(method_not_allowed),
        )
        .layer(Extension(table))
}

fn money_routes() -> Router<SharedRepository> {
    Router::new()
        .route(
            "/money",
            get(money::list_expenses)
                .post(money::create_expense)
                .fallback(method_not_allowed),
        )
        .route(
            "/money/:id",
            delete(money::delete_expense).fallback(method_not_allowed),
        )
}
