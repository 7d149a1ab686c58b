use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The highlight core itself is total over its inputs and never fails; these
/// variants exist for the handler layer (payload caps, malformed requests).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Field '{field}' exceeds the {limit} character limit")]
    PayloadTooLarge { field: String, limit: usize },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Rejects a text field longer than `limit` characters.
pub fn ensure_field_within(field: &str, value: &str, limit: usize) -> Result<(), AppError> {
    if value.chars().count() > limit {
        return Err(AppError::PayloadTooLarge {
            field: field.to_string(),
            limit,
        });
    }
    Ok(())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                self.to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_field_within_accepts_at_limit() {
        assert!(ensure_field_within("suggested", "abcde", 5).is_ok());
    }

    #[test]
    fn test_ensure_field_within_rejects_over_limit() {
        let err = ensure_field_within("suggested", "abcdef", 5).unwrap_err();
        assert!(matches!(
            err,
            AppError::PayloadTooLarge { ref field, limit: 5 } if field == "suggested"
        ));
    }

    #[test]
    fn test_ensure_field_within_counts_chars_not_bytes() {
        // five chars, six bytes
        assert!(ensure_field_within("suggested", "héllo", 5).is_ok());
    }
}
