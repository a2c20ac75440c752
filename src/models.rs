use serde::{Deserialize, Serialize};

use crate::error::NoteError;

/// Store-assigned comment identifier. Sequential from 0, never reused.
pub type CommentId = u64;

/// Visibility level of a note body or of commenting on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Privacy {
    #[default]
    Everyone = 0,
    Friends = 1,
    FriendsOfFriends = 2,
    OnlyMe = 3,
}

impl TryFrom<u8> for Privacy {
    type Error = NoteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Everyone),
            1 => Ok(Self::Friends),
            2 => Ok(Self::FriendsOfFriends),
            3 => Ok(Self::OnlyMe),
            other => Err(NoteError::Validation(format!(
                "privacy level must be in 0..=3, got {other}"
            ))),
        }
    }
}

impl From<Privacy> for u8 {
    fn from(value: Privacy) -> Self {
        value as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: String,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub privacy: Privacy,
    #[serde(default)]
    pub comment_privacy: Privacy,
    /// Encoded view rules; opaque to the store.
    #[serde(default)]
    pub privacy_view: String,
    /// Encoded comment rules; opaque to the store.
    #[serde(default)]
    pub privacy_comment: String,
}

impl Note {
    pub fn new(
        note_id: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            note_id: note_id.into(),
            title: title.into(),
            text: text.into(),
            privacy: Privacy::default(),
            comment_privacy: Privacy::default(),
            privacy_view: String::new(),
            privacy_comment: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub note_id: String,
    pub message: String,
    pub is_deleted: bool,
}

/// A comment to create while seeding a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedComment {
    pub note_id: String,
    pub message: String,
}
