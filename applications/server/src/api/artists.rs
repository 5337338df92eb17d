/// Artists API routes
use crate::{
    error::Result, middleware::AuthenticatedUser, services::catalog, state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mixtape_core::{
    types::{Artist, ArtistId, ArtistWithSongs, CreateArtist, UpdateArtist},
    MixtapeError,
};
use mixtape_storage as storage;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ArtistListQuery {
    #[serde(default)]
    pub name: String,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// GET /artists
/// List artists filtered by name substring, paginated (defaults 10/0)
pub async fn list_artists(
    State(app_state): State<AppState>,
    Query(query): Query<ArtistListQuery>,
) -> Result<Json<Vec<Artist>>> {
    let artists = storage::artists::list(
        &app_state.pool,
        &query.name,
        query.limit.unwrap_or(10),
        query.skip.unwrap_or(0),
    )
    .await?;

    Ok(Json(artists))
}

/// GET /artists/:id
/// Get one artist with its songs
pub async fn get_artist(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
) -> Result<Json<ArtistWithSongs>> {
    let artist = storage::artists::get_with_songs(&app_state.pool, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Artist", id))?;

    Ok(Json(artist))
}

/// POST /artists
pub async fn create_artist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreateArtist>,
) -> Result<(StatusCode, Json<Artist>)> {
    let artist = catalog::create_artist(&app_state.pool, auth.actor(), req).await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

/// PUT /artists/:id
pub async fn update_artist(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UpdateArtist>,
) -> Result<(StatusCode, Json<Artist>)> {
    let artist = catalog::update_artist(&app_state.pool, auth.actor(), id, req).await?;
    Ok((StatusCode::ACCEPTED, Json(artist)))
}

/// DELETE /artists/:id
pub async fn delete_artist(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    catalog::delete_artist(&app_state.pool, auth.actor(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
