mod artist;
mod genre;
mod ids;
mod like;
mod playlist;
mod song;
mod user;

pub use artist::{Artist, ArtistWithSongs, CreateArtist, UpdateArtist};
pub use genre::{CreateGenre, Genre, GenreRef};
pub use ids::{ArtistId, GenreId, PlaylistId, SongId, UserId};
pub use like::Like;
pub use playlist::{CreatePlaylist, Playlist, PlaylistSong, UpdatePlaylist};
pub use song::{CreateSong, Song, SongFilter, SongWithLikes, UpdateSong};
pub use user::{Actor, CreateUser, User};
