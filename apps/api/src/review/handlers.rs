use axum::{extract::State, Json};

use crate::errors::{ensure_field_within, AppError};
use crate::review::entry::{review_entry, EntryReviewRequest, EntryReviewResponse};
use crate::state::AppState;

/// POST /api/v1/review/entry
pub async fn handle_review_entry(
    State(state): State<AppState>,
    Json(req): Json<EntryReviewRequest>,
) -> Result<Json<EntryReviewResponse>, AppError> {
    let max_chars = state.config.max_field_chars;
    let max_items = state.config.max_list_items;

    ensure_list_within("suggested_description", req.suggested_description.len(), max_items)?;
    ensure_list_within(
        "suggested_technologies",
        req.suggested_technologies.len(),
        max_items,
    )?;
    for bullet in &req.suggested_description {
        ensure_field_within("suggested_description", bullet, max_chars)?;
    }

    if let Some(bullets) = &req.current_description {
        ensure_list_within("current_description", bullets.len(), max_items)?;
        for bullet in bullets {
            ensure_field_within("current_description", bullet, max_chars)?;
        }
    }
    if let Some(tags) = &req.current_technologies {
        ensure_list_within("current_technologies", tags.len(), max_items)?;
    }

    Ok(Json(review_entry(&req, state.config.boundary_mode)))
}

/// Rejects a list with more than `limit` items.
fn ensure_list_within(field: &str, len: usize, limit: usize) -> Result<(), AppError> {
    if len > limit {
        return Err(AppError::Validation(format!(
            "{field} has {len} items, limit is {limit}"
        )));
    }
    Ok(())
}
