use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_core::ItemId;

use crate::app::services::AppServices;
use crate::app::validation::{self, BindError};
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/item", get(list_items).post(create_item))
        // Static segment wins over `:id` in the route table.
        .route("/item/csv", get(export_csv))
        .route(
            "/item/:id",
            get(get_item).delete(delete_item).patch(update_item),
        )
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let candidate = match validation::bind_item(&body) {
        Ok(v) => v,
        Err(e) => return errors::bind_error_to_response(e),
    };

    let id = services.store().create(candidate);

    (
        StatusCode::CREATED,
        Json(dto::CreatedResponse {
            message: "successfully added",
            id,
        }),
    )
        .into_response()
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::PaginationQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return errors::bind_error_to_response(BindError::Unsupported(e.body_text())),
    };

    let page = match validation::bind_pagination(query.page.as_deref(), query.size.as_deref()) {
        Ok(p) => p,
        Err(e) => return errors::bind_error_to_response(e),
    };

    match services.store().list(page) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match validation::bind_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::bind_error_to_response(e),
    };

    match ItemId::try_from(id).and_then(|id| services.store().get(id)) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match validation::bind_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::bind_error_to_response(e),
    };

    match ItemId::try_from(id).and_then(|id| services.store().delete(id)) {
        Ok(_) => (StatusCode::OK, Json(dto::MessageResponse::new("deleted"))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let id = match validation::bind_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::bind_error_to_response(e),
    };

    let replacement = match validation::bind_item(&body) {
        Ok(v) => v,
        Err(e) => return errors::bind_error_to_response(e),
    };

    match ItemId::try_from(id).and_then(|id| services.store().update(id, replacement)) {
        Ok(_) => (StatusCode::OK, Json(dto::MessageResponse::new("updated"))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn export_csv(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().export_csv().into_bytes() {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=inventory.csv",
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "csv export failed");
            errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "csv export failed")
        }
    }
}
