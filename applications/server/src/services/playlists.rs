/// Playlist, membership, and like orchestration
///
/// Same transaction discipline as the catalog service. Visibility on reads
/// and the private-playlist gate on membership adds both go through
/// `mixtape_core::policy`.
use mixtape_core::{policy, types::*, MixtapeError, Result};
use mixtape_storage as storage;
use sqlx::SqlitePool;

pub async fn create_playlist(
    pool: &SqlitePool,
    actor: &Actor,
    input: CreatePlaylist,
) -> Result<Playlist> {
    let mut tx = pool.begin().await?;

    if storage::playlists::find_by_owner_and_name(&mut *tx, actor.id, &input.name)
        .await?
        .is_some()
    {
        return Err(MixtapeError::conflict(format!(
            "playlist with name: '{}' already exists for user: {}",
            input.name, actor.id
        )));
    }

    let playlist = storage::playlists::create(&mut *tx, input, actor.id).await?;
    tx.commit().await?;

    Ok(playlist)
}

pub async fn update_playlist(
    pool: &SqlitePool,
    actor: &Actor,
    id: PlaylistId,
    input: UpdatePlaylist,
) -> Result<Playlist> {
    let mut tx = pool.begin().await?;

    let playlist = storage::playlists::get_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Playlist", id))?;

    if !policy::can_modify(actor, playlist.created_by) {
        return Err(MixtapeError::Forbidden);
    }

    let playlist = storage::playlists::update(&mut tx, id, input).await?;
    tx.commit().await?;

    Ok(playlist)
}

pub async fn delete_playlist(pool: &SqlitePool, actor: &Actor, id: PlaylistId) -> Result<()> {
    let mut tx = pool.begin().await?;

    let playlist = storage::playlists::get_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Playlist", id))?;

    if !policy::can_modify(actor, playlist.created_by) {
        return Err(MixtapeError::Forbidden);
    }

    storage::playlists::delete(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(())
}

/// Visibility-gated single-playlist read
pub async fn get_playlist(pool: &SqlitePool, actor: &Actor, id: PlaylistId) -> Result<Playlist> {
    let playlist = storage::playlists::get_by_id(pool, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Playlist", id))?;

    if !policy::can_read_playlist(Some(actor), &playlist) {
        return Err(MixtapeError::Forbidden);
    }

    Ok(playlist)
}

/// Songs in a playlist, gated by the visibility of the parent playlist
pub async fn list_songs(
    pool: &SqlitePool,
    actor: &Actor,
    playlist_id: PlaylistId,
) -> Result<Vec<Song>> {
    let playlist = storage::playlists::get_by_id(pool, playlist_id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Playlist", playlist_id))?;

    if !policy::can_read_playlist(Some(actor), &playlist) {
        return Err(MixtapeError::Forbidden);
    }

    storage::playlist_songs::songs_in(pool, playlist_id).await
}

/// Add a song to a playlist
///
/// Anyone who can read the playlist may add to it (public playlists accept
/// additions from any authenticated actor); the composite primary key
/// rejects a duplicate membership, surfaced as a conflict.
pub async fn add_song(
    pool: &SqlitePool,
    actor: &Actor,
    playlist_id: PlaylistId,
    song_id: SongId,
) -> Result<PlaylistSong> {
    let mut tx = pool.begin().await?;

    let playlist = storage::playlists::get_by_id(&mut *tx, playlist_id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Playlist", playlist_id))?;

    if !policy::can_read_playlist(Some(actor), &playlist) {
        return Err(MixtapeError::Forbidden);
    }

    if storage::songs::get_by_id(&mut *tx, song_id).await?.is_none() {
        return Err(MixtapeError::not_found("Song", song_id));
    }

    let membership = match storage::playlist_songs::add(&mut *tx, playlist_id, song_id, actor.id)
        .await
    {
        Ok(membership) => membership,
        Err(MixtapeError::ConstraintViolation(_)) => {
            return Err(MixtapeError::conflict(format!(
                "song {song_id} already in playlist {playlist_id}"
            )));
        }
        Err(e) => return Err(e),
    };

    tx.commit().await?;

    Ok(membership)
}

/// Remove a song from a playlist; owner only, regardless of privacy
pub async fn remove_song(
    pool: &SqlitePool,
    actor: &Actor,
    playlist_id: PlaylistId,
    song_id: SongId,
) -> Result<()> {
    let mut tx = pool.begin().await?;

    let playlist = storage::playlists::get_by_id(&mut *tx, playlist_id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Playlist", playlist_id))?;

    if !policy::can_modify(actor, playlist.created_by) {
        return Err(MixtapeError::Forbidden);
    }

    storage::playlist_songs::remove(&mut *tx, playlist_id, song_id).await?;
    tx.commit().await?;

    Ok(())
}

/// Toggle a like for (song, actor)
///
/// `like = true` inserts the row (conflict if already liked); `like = false`
/// deletes it (not found if not liked). Returns the created row on like,
/// `None` on unlike.
pub async fn toggle_like(
    pool: &SqlitePool,
    actor: &Actor,
    song_id: SongId,
    like: bool,
) -> Result<Option<Like>> {
    let mut tx = pool.begin().await?;

    if storage::songs::get_by_id(&mut *tx, song_id).await?.is_none() {
        return Err(MixtapeError::not_found("Song", song_id));
    }

    let found = storage::likes::exists(&mut *tx, song_id, actor.id).await?;

    let result = if like {
        if found {
            return Err(MixtapeError::conflict(format!(
                "user {} has already liked song {}",
                actor.id, song_id
            )));
        }
        Some(storage::likes::insert(&mut *tx, song_id, actor.id).await?)
    } else {
        if !found {
            return Err(MixtapeError::not_found("Like", song_id));
        }
        storage::likes::remove(&mut *tx, song_id, actor.id).await?;
        None
    };

    tx.commit().await?;

    Ok(result)
}
