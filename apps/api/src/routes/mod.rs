pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::highlight::handlers::handle_highlight;
use crate::review::handlers::handle_review_entry;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Single-field diff highlighting
        .route("/api/v1/highlight", post(handle_highlight))
        // Whole-entry review (bullets + tags)
        .route("/api/v1/review/entry", post(handle_review_entry))
        .with_state(state)
}
