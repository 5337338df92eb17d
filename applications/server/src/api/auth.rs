/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use mixtape_core::types::{CreateUser, User};
use mixtape_storage as storage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /auth/register
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let password_hash = app_state.auth.hash_password(&req.password)?;

    let mut tx = app_state.pool.begin().await?;

    if storage::users::find_by_email(&mut *tx, &req.email)
        .await?
        .is_some()
    {
        return Err(mixtape_core::MixtapeError::conflict(format!(
            "email: {} already registered",
            req.email
        ))
        .into());
    }

    let user = storage::users::create(
        &mut *tx,
        CreateUser {
            email: req.email,
            password_hash,
        },
    )
    .await?;

    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /auth/login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    // A uniform message for unknown email and bad password
    let invalid = || ServerError::Auth("Invalid email or password".to_string());

    let user = storage::users::find_by_email(&app_state.pool, &req.email)
        .await?
        .ok_or_else(invalid)?;

    let password_hash = storage::users::get_password_hash(&app_state.pool, user.id)
        .await?
        .ok_or_else(invalid)?;

    if !app_state.auth.verify_password(&req.password, &password_hash)? {
        return Err(invalid());
    }

    let access_token = app_state.auth.create_access_token(user.id, &user.email)?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
    }))
}
