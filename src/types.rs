use axum::http::StatusCode;

use std::sync::Arc;

use crate::modules::notes::store::{NoteStore, StoreError};

/// Utility function for mapping a store error into the response surfaced to the remote caller.
pub fn store_error(err: StoreError) -> (StatusCode, String) {
    match err {
        StoreError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NoteStore>,
}
