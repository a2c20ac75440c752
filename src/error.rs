use crate::models::CommentId;

pub type Result<T, E = NoteError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteError {
    #[error("note {0} not found")]
    NoteNotFound(String),
    #[error("comment {0} not found")]
    CommentNotFound(CommentId),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    Validation(String),
}

impl NoteError {
    pub fn is_not_found(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }
}
