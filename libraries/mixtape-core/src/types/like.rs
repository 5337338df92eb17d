//! Like types

use crate::types::{SongId, UserId};
use serde::{Deserialize, Serialize};

/// Like membership row: existence = liked, absence = not liked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub song_id: SongId,
    pub created_by: UserId,
}
