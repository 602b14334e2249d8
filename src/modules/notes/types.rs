use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Note {
  pub id: String,
  pub title: String,
  pub content: String
}

#[derive(Deserialize, Serialize)]
pub struct CreateNotePayload {
  pub title: String,
  pub content: String
}

#[derive(Deserialize, Serialize)]
pub struct UpdateNotePayload {
  pub title: String,
  pub content: String
}

#[derive(Deserialize, Serialize)]
pub struct CreateNoteResponse {
  pub note: Note
}

#[derive(Deserialize, Serialize)]
pub struct GetNoteResponse {
  pub note: Note
}

#[derive(Deserialize, Serialize)]
pub struct ListNotesResponse {
  pub notes: Vec<Note>
}

#[derive(Deserialize, Serialize)]
pub struct UpdateNoteResponse {
  pub note: Note
}

#[derive(Deserialize, Serialize)]
pub struct DeleteNoteResponse {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>
}
