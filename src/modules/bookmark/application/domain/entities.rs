use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Storage and wire discriminator of a bookmark target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookmarkKind {
    Post,
    Playlist,
}

impl BookmarkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Playlist => "playlist",
        }
    }
}

impl fmt::Display for BookmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookmarkKind {
    type Err = BookmarkTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Self::Post),
            "playlist" => Ok(Self::Playlist),
            other => Err(BookmarkTargetError::UnknownType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookmarkTargetError {
    #[error("Unknown bookmark type: {0}")]
    UnknownType(String),

    #[error("Target id cannot be empty")]
    EmptyTargetId,

    #[error("Playlist id is not a valid UUID: {0}")]
    InvalidPlaylistId(String),
}

/// What a bookmark points at. Targets are not foreign keys and may dangle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BookmarkTarget {
    Post(String),
    Playlist(Uuid),
}

impl BookmarkTarget {
    pub fn parse(kind: &str, target_id: &str) -> Result<Self, BookmarkTargetError> {
        let kind: BookmarkKind = kind.trim().parse()?;
        let target_id = target_id.trim();
        if target_id.is_empty() {
            return Err(BookmarkTargetError::EmptyTargetId);
        }

        match kind {
            BookmarkKind::Post => Ok(Self::Post(target_id.to_string())),
            BookmarkKind::Playlist => Uuid::parse_str(target_id)
                .map(Self::Playlist)
                .map_err(|_| BookmarkTargetError::InvalidPlaylistId(target_id.to_string())),
        }
    }

    pub fn kind(&self) -> BookmarkKind {
        match self {
            Self::Post(_) => BookmarkKind::Post,
            Self::Playlist(_) => BookmarkKind::Playlist,
        }
    }

    pub fn target_id(&self) -> String {
        match self {
            Self::Post(id) => id.clone(),
            Self::Playlist(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub id: String,
    pub user_id: UserId,
    pub target: BookmarkTarget,
    pub created_at: DateTime<Utc>,
}
