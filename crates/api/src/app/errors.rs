use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockdesk_infra::StoreError;

/// Map a store failure to the wire contract.
///
/// Every store failure, a missing row included, is reported as the generic
/// 500; the contract does not distinguish not-found from any other failure.
/// The real cause goes to the log under the failing operation's name.
pub fn store_error_to_response(operation: &'static str, err: StoreError) -> axum::response::Response {
    tracing::error!(operation, error = %err, "store operation failed");
    internal_error()
}

/// 500 with the generic failure message.
pub fn internal_error() -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor.")
}

/// 400 for a create/update payload that fails validation.
pub fn missing_fields() -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "Faltan campos obligatorios.")
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}
