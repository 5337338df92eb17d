/// Playlists API routes
use crate::{
    error::Result,
    middleware::AuthenticatedUser,
    services::playlists,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mixtape_core::types::{CreatePlaylist, Playlist, PlaylistId, UpdatePlaylist};
use mixtape_storage as storage;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlaylistListQuery {
    #[serde(default)]
    pub name: String,
    /// Tag filtering was never wired up; the parameter is accepted and
    /// ignored so existing clients keep working
    pub tags: Option<String>,
}

/// GET /playlists
/// List playlists visible to the actor: public ones plus their own
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Query(query): Query<PlaylistListQuery>,
) -> Result<Json<Vec<Playlist>>> {
    let _ = query.tags;

    let playlists =
        storage::playlists::list_visible(&app_state.pool, auth.actor().id, &query.name).await?;

    Ok(Json(playlists))
}

/// GET /playlists/:id
pub async fn get_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Playlist>> {
    let playlist = playlists::get_playlist(&app_state.pool, auth.actor(), id).await?;
    Ok(Json(playlist))
}

/// POST /playlists
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreatePlaylist>,
) -> Result<(StatusCode, Json<Playlist>)> {
    let playlist = playlists::create_playlist(&app_state.pool, auth.actor(), req).await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// PUT /playlists/:id
pub async fn update_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UpdatePlaylist>,
) -> Result<(StatusCode, Json<Playlist>)> {
    let playlist = playlists::update_playlist(&app_state.pool, auth.actor(), id, req).await?;
    Ok((StatusCode::ACCEPTED, Json(playlist)))
}

/// DELETE /playlists/:id
pub async fn delete_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    playlists::delete_playlist(&app_state.pool, auth.actor(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
