/// API route modules
pub mod artists;
pub mod auth;
pub mod genres;
pub mod health;
pub mod likes;
pub mod playlist_songs;
pub mod playlists;
pub mod songs;
