use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod modules;
pub mod types;

use crate::modules::notes::api::*;
use crate::types::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route(
            "/notes",
             get(list_notes)
            .post(create_note),
        )
        .route(
            "/notes/:id",
             get(get_note)
            .put(update_note)
            .delete(delete_note),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
