/// Like API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    services::playlists,
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mixtape_core::types::SongId;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub song_id: SongId,
    /// 1 = like, 0 = remove like
    pub dir: u8,
}

/// POST /like
/// Toggle a like on a song: dir=1 creates it (201), dir=0 removes it (204)
pub async fn like_song(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<LikeRequest>,
) -> Result<Response> {
    if req.dir > 1 {
        return Err(ServerError::BadRequest("dir must be 0 or 1".to_string()));
    }

    let result =
        playlists::toggle_like(&app_state.pool, auth.actor(), req.song_id, req.dir == 1).await?;

    match result {
        Some(like) => Ok((StatusCode::CREATED, Json(like)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
