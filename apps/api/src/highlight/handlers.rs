use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{ensure_field_within, AppError};
use crate::highlight::diff::{annotate, AnnotatedToken};
use crate::state::AppState;

/// Request body for a single-field highlight comparison.
/// `current` absent or empty means an empty baseline: everything is new.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightRequest {
    pub current: Option<String>,
    pub suggested: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightResponse {
    pub tokens: Vec<AnnotatedToken>,
}

/// POST /api/v1/highlight
pub async fn handle_highlight(
    State(state): State<AppState>,
    Json(req): Json<HighlightRequest>,
) -> Result<Json<HighlightResponse>, AppError> {
    let limit = state.config.max_field_chars;
    ensure_field_within("suggested", &req.suggested, limit)?;
    if let Some(current) = &req.current {
        ensure_field_within("current", current, limit)?;
    }

    let tokens = annotate(
        req.current.as_deref(),
        &req.suggested,
        state.config.boundary_mode,
    );
    Ok(Json(HighlightResponse { tokens }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::highlight::diff::BoundaryMode;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 8080,
                rust_log: "info".to_string(),
                max_field_chars: 64,
                max_list_items: 8,
                boundary_mode: BoundaryMode::Legacy,
            },
        }
    }

    #[tokio::test]
    async fn test_highlight_annotates_new_tokens() {
        let req = HighlightRequest {
            current: Some("a b c".to_string()),
            suggested: "a X c".to_string(),
        };

        let Json(resp) = handle_highlight(State(test_state()), Json(req)).await.unwrap();
        assert_eq!(resp.tokens.len(), 3);
        assert!(!resp.tokens[0].is_new);
        assert!(resp.tokens[1].is_new && resp.tokens[1].is_start && resp.tokens[1].is_end);
        assert!(!resp.tokens[2].is_new);
    }

    #[tokio::test]
    async fn test_highlight_without_current_marks_all_new() {
        let req = HighlightRequest {
            current: None,
            suggested: "brand new bullet".to_string(),
        };

        let Json(resp) = handle_highlight(State(test_state()), Json(req)).await.unwrap();
        assert!(resp.tokens.iter().all(|t| t.is_new));
    }

    #[tokio::test]
    async fn test_highlight_rejects_oversized_suggested() {
        let req = HighlightRequest {
            current: None,
            suggested: "x".repeat(65),
        };

        let err = handle_highlight(State(test_state()), Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge { .. }));
    }

    #[tokio::test]
    async fn test_highlight_rejects_oversized_current() {
        let req = HighlightRequest {
            current: Some("x".repeat(65)),
            suggested: "fine".to_string(),
        };

        let err = handle_highlight(State(test_state()), Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge { ref field, .. } if field == "current"));
    }
}
