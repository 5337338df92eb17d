//! Mixtape Server Library
//!
//! Multi-user music catalog REST API: artists, genres, songs, playlists,
//! playlist membership, and per-user song likes, with JWT authentication
//! and ownership-based authorization.
//!
//! This library exposes the components (including the full router) for
//! testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::auth::AuthService;
pub use state::AppState;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Build the application router
///
/// Reads on artists, songs, and genres are anonymous; every mutation plus
/// the playlist surface and like toggling require a Bearer token, enforced
/// by the [`middleware::AuthenticatedUser`] extractor on the handlers.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        // Auth
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        // Artists
        .route("/artists", get(api::artists::list_artists))
        .route("/artists", post(api::artists::create_artist))
        .route("/artists/:id", get(api::artists::get_artist))
        .route("/artists/:id", put(api::artists::update_artist))
        .route("/artists/:id", delete(api::artists::delete_artist))
        // Genres
        .route("/genres", get(api::genres::list_genres))
        .route("/genres", post(api::genres::create_genre))
        // Songs
        .route("/songs", get(api::songs::list_songs))
        .route("/songs", post(api::songs::create_song))
        .route("/songs/:id", get(api::songs::get_song))
        .route("/songs/:id", put(api::songs::update_song))
        .route("/songs/:id", delete(api::songs::delete_song))
        // Playlists
        .route("/playlists", get(api::playlists::list_playlists))
        .route("/playlists", post(api::playlists::create_playlist))
        .route("/playlists/:id", get(api::playlists::get_playlist))
        .route("/playlists/:id", put(api::playlists::update_playlist))
        .route("/playlists/:id", delete(api::playlists::delete_playlist))
        // Playlist membership
        .route("/playlist-songs", post(api::playlist_songs::add_playlist_song))
        .route(
            "/playlist-songs/:playlist_id",
            get(api::playlist_songs::get_playlist_songs),
        )
        .route(
            "/playlist-songs/:playlist_id/:song_id",
            delete(api::playlist_songs::delete_playlist_song),
        )
        // Likes
        .route("/like", post(api::likes::like_song))
        .with_state(app_state)
}
