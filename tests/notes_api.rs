use std::sync::Arc;

use notes_backend::app;
use notes_backend::modules::notes::store::NoteStore;
use notes_backend::modules::notes::types::*;
use notes_backend::types::AppState;

async fn spawn_server() -> String {
    let state = AppState {
        store: Arc::new(NoteStore::new()),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn groceries_scenario_end_to_end() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: CreateNoteResponse = client
        .post(format!("{base}/notes"))
        .json(&CreateNotePayload {
            title: "Groceries".to_string(),
            content: "Milk, eggs".to_string(),
        })
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!created.note.id.is_empty());
    let id = created.note.id;

    let fetched: GetNoteResponse = client
        .get(format!("{base}/notes/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.note.title, "Groceries");
    assert_eq!(fetched.note.content, "Milk, eggs");

    let updated: UpdateNoteResponse = client
        .put(format!("{base}/notes/{id}"))
        .json(&UpdateNotePayload {
            title: "Groceries v2".to_string(),
            content: "Milk, eggs, bread".to_string(),
        })
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.note.id, id);
    assert_eq!(updated.note.title, "Groceries v2");
    assert_eq!(updated.note.content, "Milk, eggs, bread");

    let deleted = client
        .delete(format!("{base}/notes/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), reqwest::StatusCode::OK);
    let deleted: DeleteNoteResponse = deleted.json().await.unwrap();
    assert!(deleted.success);

    let resp = client
        .get(format!("{base}/notes/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "note not found");

    let listed: ListNotesResponse = client
        .get(format!("{base}/notes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.notes.is_empty());
}

#[tokio::test]
async fn unknown_id_fails_uniformly_over_the_wire() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/notes/12345"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "note not found");

    let resp = client
        .put(format!("{base}/notes/12345"))
        .json(&UpdateNotePayload {
            title: "t".to_string(),
            content: "c".to_string(),
        })
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "note not found");

    let resp = client
        .delete(format!("{base}/notes/12345"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body: DeleteNoteResponse = resp.json().await.unwrap();
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("note not found"));
}

#[tokio::test]
async fn empty_title_and_content_are_accepted() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: CreateNoteResponse = client
        .post(format!("{base}/notes"))
        .json(&CreateNotePayload {
            title: String::new(),
            content: String::new(),
        })
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!created.note.id.is_empty());
    assert_eq!(created.note.title, "");
    assert_eq!(created.note.content, "");
}
