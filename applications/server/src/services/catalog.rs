/// Catalog mutation orchestration: artists, genres, songs
///
/// Every write runs as one transaction: existence checks, duplicate checks,
/// and ownership checks share the connection with the write itself, and an
/// early return rolls the whole sequence back. The schema's UNIQUE indexes
/// remain the final arbiter if a concurrent request races past a check.
use mixtape_core::{policy, types::*, MixtapeError, Result};
use mixtape_storage as storage;
use sqlx::{SqliteConnection, SqlitePool};

/// Resolve a client-supplied genre reference to a canonical genre id
async fn resolve_genre(conn: &mut SqliteConnection, genre: &GenreRef) -> Result<GenreId> {
    match genre {
        GenreRef::Id(id) => storage::genres::get_by_id(&mut *conn, *id)
            .await?
            .map(|g| g.id)
            .ok_or_else(|| MixtapeError::not_found("Genre", id)),
        GenreRef::Label(label) => storage::genres::find_by_label(&mut *conn, label)
            .await?
            .map(|g| g.id)
            .ok_or_else(|| MixtapeError::not_found("Genre", label)),
    }
}

pub async fn create_artist(pool: &SqlitePool, actor: &Actor, input: CreateArtist) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    if storage::artists::find_by_name(&mut *tx, &input.name)
        .await?
        .is_some()
    {
        return Err(MixtapeError::conflict(format!(
            "artist name: {} already exists",
            input.name
        )));
    }

    let artist = storage::artists::create(&mut *tx, input, actor.id).await?;
    tx.commit().await?;

    Ok(artist)
}

pub async fn update_artist(
    pool: &SqlitePool,
    actor: &Actor,
    id: ArtistId,
    input: UpdateArtist,
) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let artist = storage::artists::get_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Artist", id))?;

    if !policy::can_modify(actor, artist.created_by) {
        return Err(MixtapeError::Forbidden);
    }

    let artist = storage::artists::update(&mut tx, id, input).await?;
    tx.commit().await?;

    Ok(artist)
}

pub async fn delete_artist(pool: &SqlitePool, actor: &Actor, id: ArtistId) -> Result<()> {
    let mut tx = pool.begin().await?;

    let artist = storage::artists::get_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Artist", id))?;

    if !policy::can_modify(actor, artist.created_by) {
        return Err(MixtapeError::Forbidden);
    }

    storage::artists::delete(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(())
}

pub async fn create_genre(pool: &SqlitePool, input: CreateGenre) -> Result<Genre> {
    let mut tx = pool.begin().await?;

    if storage::genres::find_by_label(&mut *tx, &input.label)
        .await?
        .is_some()
    {
        return Err(MixtapeError::conflict(format!(
            "genre with label: '{}' already exists",
            input.label
        )));
    }

    let genre = storage::genres::create(&mut *tx, input).await?;
    tx.commit().await?;

    Ok(genre)
}

pub async fn create_song(pool: &SqlitePool, actor: &Actor, input: CreateSong) -> Result<Song> {
    let mut tx = pool.begin().await?;

    if storage::artists::get_by_id(&mut *tx, input.artist_id)
        .await?
        .is_none()
    {
        return Err(MixtapeError::not_found("Artist", input.artist_id));
    }

    let genre_id = match &input.genre {
        Some(genre) => Some(resolve_genre(&mut tx, genre).await?),
        None => None,
    };

    // Duplicate check is scoped to the artist: same title under a different
    // artist is allowed
    if storage::songs::find_duplicate(&mut *tx, input.artist_id, &input.title)
        .await?
        .is_some()
    {
        return Err(MixtapeError::conflict(format!(
            "artist with id: {} and song title: '{}' already exists",
            input.artist_id, input.title
        )));
    }

    let song = storage::songs::create(&mut *tx, input, genre_id, actor.id).await?;
    tx.commit().await?;

    Ok(song)
}

pub async fn update_song(
    pool: &SqlitePool,
    actor: &Actor,
    id: SongId,
    input: UpdateSong,
) -> Result<Song> {
    let mut tx = pool.begin().await?;

    let song = storage::songs::get_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Song", id))?;

    if !policy::can_modify(actor, song.created_by) {
        return Err(MixtapeError::Forbidden);
    }

    let genre_id = match &input.genre {
        Some(genre) => Some(resolve_genre(&mut tx, genre).await?),
        None => None,
    };

    let changes = storage::songs::SongChanges {
        title: input.title,
        genre_id,
        length: input.length,
    };

    let song = storage::songs::update(&mut tx, id, changes).await?;
    tx.commit().await?;

    Ok(song)
}

pub async fn delete_song(pool: &SqlitePool, actor: &Actor, id: SongId) -> Result<()> {
    let mut tx = pool.begin().await?;

    let song = storage::songs::get_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Song", id))?;

    if !policy::can_modify(actor, song.created_by) {
        return Err(MixtapeError::Forbidden);
    }

    storage::songs::delete(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(())
}
