use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
    Json, Router,
};

use stockdesk_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/:id", put(update_product).delete(delete_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::store_error_to_response("list products", e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable product payload");
            return errors::internal_error();
        }
    };

    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(error = %e, "rejected product payload");
            return errors::missing_fields();
        }
    };

    match services.store().create(draft).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::store_error_to_response("create product", e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable product payload");
            return errors::internal_error();
        }
    };

    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(error = %e, "rejected product payload");
            return errors::missing_fields();
        }
    };

    // A malformed id is reported like a missing row: as the generic failure.
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "invalid product id");
            return errors::internal_error();
        }
    };

    match services.store().update(id, draft).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::store_error_to_response("update product", e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "invalid product id");
            return errors::internal_error();
        }
    };

    match services.store().delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response("delete product", e),
    }
}
