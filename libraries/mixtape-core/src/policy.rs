//! Ownership and visibility policy
//!
//! Pure decision functions. Callers translate a `false` into `Forbidden`
//! (ownership) or filter rows out entirely (visibility).

use crate::types::{Actor, Playlist, UserId};

/// An actor may modify an entity iff they created it.
///
/// Applies to Artist, Song, Playlist, and playlist-membership removal.
pub fn can_modify(actor: &Actor, created_by: UserId) -> bool {
    actor.id == created_by
}

/// A playlist is readable by anyone if public, otherwise only by its creator.
pub fn can_read_playlist(actor: Option<&Actor>, playlist: &Playlist) -> bool {
    !playlist.private || actor.is_some_and(|a| a.id == playlist.created_by)
}
