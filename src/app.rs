use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/word-entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route("/api/streaks", get(handlers::get_streaks))
        .with_state(state)
}
