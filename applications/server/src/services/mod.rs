/// Server services
pub mod auth;
pub mod catalog;
pub mod playlists;

pub use auth::AuthService;
