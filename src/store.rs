//! In-memory note and comment storage.
//!
//! Notes and comments live in two insertion-ordered vectors guarded by a
//! single mutex together with the comment id counter, so every operation
//! observes and mutates a consistent snapshot.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{NoteError, Result};
use crate::models::{Comment, CommentId, Note};

#[derive(Debug, Default)]
struct StoreState {
    notes: Vec<Note>,
    comments: Vec<Comment>,
    next_comment_id: CommentId,
}

impl StoreState {
    fn note_index(&self, note_id: &str) -> Result<usize> {
        self.notes
            .iter()
            .position(|note| note.note_id == note_id)
            .ok_or_else(|| {
                log::warn!("[NOTES] Note {} not found", note_id);
                NoteError::NoteNotFound(note_id.to_string())
            })
    }

    fn comment_position(&self, comment_id: CommentId) -> Option<usize> {
        self.comments
            .iter()
            .position(|comment| comment.comment_id == comment_id)
    }

    fn comments_of<'a>(
        &'a self,
        note_id: &'a str,
        deleted: bool,
    ) -> impl Iterator<Item = &'a Comment> + 'a {
        self.comments
            .iter()
            .filter(move |comment| comment.note_id == note_id && comment.is_deleted == deleted)
    }
}

#[derive(Debug, Default)]
pub struct NoteStore {
    state: Mutex<StoreState>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        // Each operation mutates at most one record, so a poisoned guard
        // still holds consistent data.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a note. Ids are not checked for uniqueness; lookups act on
    /// the first match.
    pub fn add(&self, note: Note) {
        let mut state = self.state();
        log::debug!("[NOTES] Adding note {}", note.note_id);
        state.notes.push(note);
    }

    /// Snapshot of every note in insertion order.
    pub fn get_all(&self) -> Vec<Note> {
        self.state().notes.clone()
    }

    pub fn get_by_id(&self, note_id: &str) -> Result<Note> {
        let state = self.state();
        let index = state.note_index(note_id)?;
        Ok(state.notes[index].clone())
    }

    /// Replaces the first note matching `note_id` with `new_note` in full.
    /// `new_note.note_id` is stored as given, even if it differs.
    pub fn edit(&self, note_id: &str, new_note: Note) -> Result<()> {
        let mut state = self.state();
        let index = state.note_index(note_id)?;
        log::debug!("[NOTES] Replacing note {} at position {}", note_id, index);
        state.notes[index] = new_note;
        Ok(())
    }

    /// Removes the first note matching `note_id`. Its comments are kept.
    pub fn delete(&self, note_id: &str) -> Result<()> {
        let mut state = self.state();
        let index = state.note_index(note_id)?;
        state.notes.remove(index);
        log::debug!("[NOTES] Deleted note {}", note_id);
        Ok(())
    }

    pub fn create_comment(&self, note_id: &str, message: impl Into<String>) -> Result<CommentId> {
        let mut state = self.state();
        state.note_index(note_id)?;

        let comment_id = state.next_comment_id;
        state.next_comment_id += 1;
        state.comments.push(Comment {
            comment_id,
            note_id: note_id.to_string(),
            message: message.into(),
            is_deleted: false,
        });
        log::debug!("[NOTES] Created comment {} on note {}", comment_id, note_id);
        Ok(comment_id)
    }

    /// Visible comments of a note in creation order.
    pub fn get_comments(&self, note_id: &str) -> Vec<Comment> {
        self.state().comments_of(note_id, false).cloned().collect()
    }

    /// Hidden comments of a note in creation order.
    pub fn deleted_comments(&self, note_id: &str) -> Vec<Comment> {
        self.state().comments_of(note_id, true).cloned().collect()
    }

    /// Looks up a comment whether it is visible or hidden.
    pub fn get_comment(&self, comment_id: CommentId) -> Result<Comment> {
        let state = self.state();
        state
            .comment_position(comment_id)
            .map(|index| state.comments[index].clone())
            .ok_or(NoteError::CommentNotFound(comment_id))
    }

    /// Replaces the message of a comment; id, note and deleted flag stay.
    pub fn edit_comment(&self, comment_id: CommentId, new_message: impl Into<String>) -> Result<()> {
        let mut state = self.state();
        let Some(index) = state.comment_position(comment_id) else {
            log::warn!("[NOTES] Comment {} not found for edit", comment_id);
            return Err(NoteError::CommentNotFound(comment_id));
        };
        state.comments[index].message = new_message.into();
        log::debug!("[NOTES] Edited comment {}", comment_id);
        Ok(())
    }

    /// Hides a comment. Hiding an already hidden comment succeeds.
    pub fn delete_comment(&self, comment_id: CommentId) -> Result<()> {
        let mut state = self.state();
        let Some(index) = state.comment_position(comment_id) else {
            log::warn!("[NOTES] Comment {} not found for delete", comment_id);
            return Err(NoteError::NotFound(format!(
                "comment {comment_id} does not exist"
            )));
        };

        let comment = &mut state.comments[index];
        if comment.is_deleted {
            log::debug!("[NOTES] Comment {} already deleted", comment_id);
        }
        comment.is_deleted = true;
        Ok(())
    }

    /// Makes a hidden comment visible again. Fails if the comment is
    /// missing or currently visible.
    pub fn restore_comment(&self, comment_id: CommentId) -> Result<()> {
        let mut state = self.state();
        let Some(comment) = state
            .comments
            .iter_mut()
            .find(|comment| comment.comment_id == comment_id && comment.is_deleted)
        else {
            log::warn!("[NOTES] Comment {} cannot be restored", comment_id);
            return Err(NoteError::NotFound(format!(
                "comment {comment_id} does not exist or is not deleted"
            )));
        };

        comment.is_deleted = false;
        log::debug!("[NOTES] Restored comment {}", comment_id);
        Ok(())
    }
}
