use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

use crate::app::validation::BindError;

pub const ITEM_NOT_FOUND: &str = "item not found";
pub const RANGE_EXCEEDED: &str = "page/size limit exceeded";

/// 400 with the ordered `[{field: message}, ...]` list.
pub fn bind_error_to_response(err: BindError) -> axum::response::Response {
    tracing::debug!(error = %err, "request rejected by validation");
    (StatusCode::BAD_REQUEST, axum::Json(err.to_messages())).into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_message(StatusCode::NOT_FOUND, ITEM_NOT_FOUND),
        DomainError::RangeExceeded => {
            json_message(StatusCode::RANGE_NOT_SATISFIABLE, RANGE_EXCEEDED)
        }
    }
}

pub fn json_message(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}
