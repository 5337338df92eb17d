//! Identifier aliases for Mixtape entities
//!
//! All entities are integer-identified (SQLite rowids).

pub type UserId = i64;
pub type ArtistId = i64;
pub type GenreId = i64;
pub type SongId = i64;
pub type PlaylistId = i64;
