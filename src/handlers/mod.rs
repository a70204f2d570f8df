// Handlers module
// HTTP handlers for the item and money routes

pub mod items;
pub mod money;

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::{ApiError, ApiResult};

/// Fallback for a known path hit with a verb it does not serve
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Fallback for paths no route matches
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Path ids arrive as text. Anything that is not an integer cannot name a
/// row, so it is reported the same way as a missing row.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Unwrap a JSON body. A request sent without a JSON content type is read
/// as an empty object so that field validation reports what is missing.
pub(crate) fn body_or_default<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
) -> ApiResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}
