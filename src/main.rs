use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notes_backend::app;
use notes_backend::modules::notes::store::NoteStore;
use notes_backend::types::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let state = AppState {
        store: Arc::new(NoteStore::new()),
    };

    let app = app(state);

    let addr = std::env::var("NOTES_LISTEN_ADDR").unwrap_or_else(|_| "[::]:50051".to_string());

    // failing to bind the fixed port is the one fatal server-side error
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::debug!("listening on {}", addr);

    axum::serve(listener, app).await.unwrap();
}
