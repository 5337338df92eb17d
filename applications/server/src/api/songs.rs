/// Songs API routes
use crate::{
    error::Result, middleware::AuthenticatedUser, services::catalog, state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mixtape_core::{
    types::{CreateSong, GenreRef, Song, SongFilter, SongId, SongWithLikes, UpdateSong},
    MixtapeError,
};
use mixtape_storage as storage;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SongListQuery {
    pub title: Option<String>,
    pub genre: Option<String>,
}

/// Query values are always strings; a number selects a genre id exactly,
/// anything else is a label substring
fn parse_genre_ref(raw: &str) -> GenreRef {
    raw.parse::<i64>()
        .map_or_else(|_| GenreRef::Label(raw.to_string()), GenreRef::Id)
}

/// GET /songs
/// List songs with like counts, filtered by title and/or genre
pub async fn list_songs(
    State(app_state): State<AppState>,
    Query(query): Query<SongListQuery>,
) -> Result<Json<Vec<SongWithLikes>>> {
    let filter = SongFilter {
        title: query.title,
        genre: query.genre.as_deref().map(parse_genre_ref),
    };

    let songs = storage::songs::list(&app_state.pool, &filter).await?;
    Ok(Json(songs))
}

/// GET /songs/:id
pub async fn get_song(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
) -> Result<Json<SongWithLikes>> {
    let song = storage::songs::get_with_likes(&app_state.pool, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Song", id))?;

    Ok(Json(song))
}

/// POST /songs
pub async fn create_song(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreateSong>,
) -> Result<(StatusCode, Json<Song>)> {
    let song = catalog::create_song(&app_state.pool, auth.actor(), req).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

/// PUT /songs/:id
pub async fn update_song(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UpdateSong>,
) -> Result<(StatusCode, Json<Song>)> {
    let song = catalog::update_song(&app_state.pool, auth.actor(), id, req).await?;
    Ok((StatusCode::ACCEPTED, Json(song)))
}

/// DELETE /songs/:id
pub async fn delete_song(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    catalog::delete_song(&app_state.pool, auth.actor(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
