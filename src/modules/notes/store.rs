//! In-memory owner of all notes, keyed by server-assigned id.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;

use crate::modules::notes::types::Note;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("note not found")]
    NotFound,
}

#[derive(Debug, Default)]
pub struct NoteStore {
    notes: RwLock<HashMap<String, Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any title/content, including empty strings.
    pub fn create(&self, title: String, content: String) -> Note {
        let note = Note {
            id: generate_id(),
            title,
            content,
        };
        self.notes.write().insert(note.id.clone(), note.clone());
        note
    }

    pub fn get(&self, id: &str) -> Result<Note, StoreError> {
        self.notes
            .read()
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Snapshot of all stored notes, in no particular order.
    pub fn list(&self) -> Vec<Note> {
        self.notes.read().values().cloned().collect()
    }

    pub fn update(&self, id: &str, title: String, content: String) -> Result<Note, StoreError> {
        let mut notes = self.notes.write();
        let note = notes.get_mut(id).ok_or(StoreError::NotFound)?;
        note.title = title;
        note.content = content;
        Ok(note.clone())
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.notes
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

// Nanosecond wall-clock tick formatted as a string. Two creations landing on
// the same tick produce the same id and the later insert wins; swap in a
// counter or uuid if that ever matters.
fn generate_id() -> String {
    Utc::now().timestamp_nanos_opt().unwrap_or_default().to_string()
}
