use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Recoverable failures of the estimation core.
///
/// Every variant is an expected outcome of bad or incomplete input and is
/// handed back to the caller as a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RideError {
    #[error("Please enter both locations")]
    MissingInput,

    #[error("Starting point and destination are the same")]
    SameLocation,

    #[error("Location(s) not found: {}", quoted(.0))]
    UnknownLocation(Vec<String>),

    #[error("Please select a payment method")]
    MissingPaymentMethod,

    #[error("Invalid pricing configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl RideError {
    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            RideError::MissingInput => "missing_input",
            RideError::SameLocation => "same_location",
            RideError::UnknownLocation(_) => "unknown_location",
            RideError::MissingPaymentMethod => "missing_payment_method",
            RideError::InvalidConfig(_) => "invalid_config",
            RideError::InvalidCoordinate(_) => "invalid_coordinate",
        }
    }
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Ride(#[from] RideError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Ride(err) => {
                let status = match err {
                    RideError::UnknownLocation(_) => StatusCode::NOT_FOUND,
                    RideError::InvalidConfig(_) | RideError::InvalidCoordinate(_) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    _ => StatusCode::BAD_REQUEST,
                };
                let mut body = json!({ "error": err.to_string(), "code": err.code() });
                if let RideError::UnknownLocation(names) = err {
                    body["unresolved"] = json!(names);
                }
                (status, body)
            }
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "error": msg, "code": "not_found" }),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error", "code": "internal" }),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error", "code": "internal" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_location_message_lists_every_name() {
        let err = RideError::UnknownLocation(vec!["paynesville".into(), "gbarnga".into()]);
        assert_eq!(err.to_string(), "Location(s) not found: 'paynesville', 'gbarnga'");
    }

    #[test]
    fn test_status_codes() {
        let missing = AppError::from(RideError::MissingInput).into_response();
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let unknown = AppError::from(RideError::UnknownLocation(vec!["x".into()])).into_response();
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let config = AppError::from(RideError::InvalidConfig("speed".into())).into_response();
        assert_eq!(config.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let internal = AppError::Internal("boom".into()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_location_body_lists_unresolved() {
        let err = RideError::UnknownLocation(vec!["Kakata".into(), "gbarnga".into()]);
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["code"], "unknown_location");
        assert_eq!(body["unresolved"], json!(["Kakata", "gbarnga"]));
        assert_eq!(body["error"], "Location(s) not found: 'Kakata', 'gbarnga'");
    }

    #[tokio::test]
    async fn test_plain_failure_body_has_no_unresolved() {
        let response = AppError::from(RideError::SameLocation).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["code"], "same_location");
        assert!(body.get("unresolved").is_none());
    }
}
