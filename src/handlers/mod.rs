pub mod products;
pub mod users;

use axum::{
    extract::FromRequest,
    http::{Method, StatusCode, Uri},
    Json,
};
use serde_json::json;

use crate::error::AppError;

/// `axum::Json` whose rejections render as `{ "error": ... }` with a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Catch-all for unknown paths and for known paths hit with the wrong method.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {} {} not found", method, uri.path()))
}
