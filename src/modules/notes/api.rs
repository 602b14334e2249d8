use axum::{
    extract::{State, Path},
    http::StatusCode,
    Json
};

use crate::types::{store_error, AppState};

use crate::modules::notes::types::*;

pub async fn health() -> &'static str {
    "ok"
}

pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<CreateNotePayload>,
) -> Json<CreateNoteResponse> {
    let note = state.store.create(body.title, body.content);

    Json(CreateNoteResponse { note })
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetNoteResponse>, (StatusCode, String)> {
    let note = state.store.get(&id).map_err(store_error)?;

    Ok(Json(GetNoteResponse { note }))
}

pub async fn list_notes(State(state): State<AppState>) -> Json<ListNotesResponse> {
    Json(ListNotesResponse {
        notes: state.store.list()
    })
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateNotePayload>,
) -> Result<Json<UpdateNoteResponse>, (StatusCode, String)> {
    let note = state
        .store
        .update(&id, body.title, body.content)
        .map_err(store_error)?;

    Ok(Json(UpdateNoteResponse { note }))
}

// Unlike get/update, a failed delete still carries a response body with
// success=false next to the error, matching the wire contract.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<DeleteNoteResponse>) {
    match state.store.delete(&id) {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteNoteResponse {
                success: true,
                error: None
            }),
        ),
        Err(err) => (
            StatusCode::NOT_FOUND,
            Json(DeleteNoteResponse {
                success: false,
                error: Some(err.to_string())
            }),
        ),
    }
}
