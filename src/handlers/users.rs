use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    error::AppResult,
    handlers::ApiJson,
    models::{PublicUser, RegisterUser, SignInUser},
    AppState,
};

// ── Register ──────────────────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<PublicUser>)> {
    let user = state.users.write().await.register(&payload)?;

    info!(id = %user.id, email = %user.email, "Registered user");

    Ok((StatusCode::CREATED, Json(user)))
}

// ── Sign in ───────────────────────────────────────────────────────────────────

pub async fn sign_in(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SignInUser>,
) -> AppResult<(StatusCode, Json<PublicUser>)> {
    let user = state.users.read().await.sign_in(&payload)?;

    info!(id = %user.id, "User signed in");

    Ok((StatusCode::OK, Json(user)))
}
