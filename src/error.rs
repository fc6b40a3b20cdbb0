use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::data::DataUnavailable;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    DataUnavailable(#[from] DataUnavailable),

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidDate(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON error body, used by the API endpoint.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::InvalidDate(_) => self.to_string(),
            AppError::DataUnavailable(err) => {
                tracing::error!(err = %err, "Menu data unavailable");
                "menu data unavailable".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidDate("amanhã".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DataUnavailable(DataUnavailable::Read {
                path: "menu.json".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
            .status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_invalid_date_body_names_the_input() {
        let response = AppError::InvalidDate("31/02".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Invalid date \"31/02\", expected YYYY-MM-DD");
    }
}
