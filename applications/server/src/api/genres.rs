/// Genres API routes
use crate::{
    error::Result, middleware::AuthenticatedUser, services::catalog, state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use mixtape_core::types::{CreateGenre, Genre};
use mixtape_storage as storage;

/// GET /genres
pub async fn list_genres(State(app_state): State<AppState>) -> Result<Json<Vec<Genre>>> {
    let genres = storage::genres::get_all(&app_state.pool).await?;
    Ok(Json(genres))
}

/// POST /genres
/// Genres have no ownership gate; any authenticated actor may create one
pub async fn create_genre(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(req): Json<CreateGenre>,
) -> Result<(StatusCode, Json<Genre>)> {
    let genre = catalog::create_genre(&app_state.pool, req).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}
