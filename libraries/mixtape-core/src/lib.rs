//! Mixtape Core
//!
//! Shared domain types, error handling, and access policy for the Mixtape
//! catalog API.
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Artist`, `Genre`, `Song`, `Playlist`, and the
//!   membership rows (`PlaylistSong`, `Like`)
//! - **Access Policy**: pure ownership/visibility decisions in [`policy`]
//! - **Error Handling**: unified [`MixtapeError`] and [`Result`] types

#![forbid(unsafe_code)]

pub mod error;
pub mod policy;
pub mod types;

// Re-export commonly used types
pub use error::{MixtapeError, Result};

pub use types::{
    Actor, Artist, ArtistId, ArtistWithSongs, CreateArtist, CreateGenre, CreatePlaylist,
    CreateSong, CreateUser, Genre, GenreId, GenreRef, Like, Playlist, PlaylistId, PlaylistSong,
    Song, SongFilter, SongId, SongWithLikes, UpdateArtist, UpdatePlaylist, UpdateSong, User,
    UserId,
};
