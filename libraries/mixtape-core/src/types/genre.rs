//! Genre types

use crate::types::GenreId;
use serde::{Deserialize, Serialize};

/// A music genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub label: String,
}

/// Data for creating a new genre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenre {
    pub label: String,
}

/// A genre reference supplied by a client: either the numeric id or the
/// textual label. Resolved to a canonical id before storage.
///
/// Deserializes untagged, so `"genre": 3` and `"genre": "House"` both work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreRef {
    Id(GenreId),
    Label(String),
}
