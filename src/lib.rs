pub mod error;
pub mod models;
pub mod seed;
pub mod store;

pub use error::{NoteError, Result};
pub use models::{Comment, CommentId, Note, Privacy, SeedComment};
pub use store::NoteStore;
