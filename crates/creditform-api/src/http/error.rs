//! Application error type mapping to HTTP status codes and the envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use creditform_types::error::{FeatureError, ValidationError};
use creditform_types::prediction::SubmittedColumns;

use super::response::{ApiErrorDetail, ApiMeta};

#[derive(Debug)]
pub enum AppError {
    /// Form answers outside the offered bounds or options, or an unreadable body.
    Validation(String),
    /// The feature row could not be built.
    Feature(FeatureError),
    /// The model rejected the submitted row. Carries the columns that were sent.
    Inference {
        message: String,
        submitted: SubmittedColumns,
    },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<FeatureError> for AppError {
    fn from(e: FeatureError) -> Self {
        AppError::Feature(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Feature(_) => StatusCode::BAD_REQUEST,
            AppError::Inference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn detail(&self) -> ApiErrorDetail {
        let (code, message, details) = match self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone(), None),
            AppError::Feature(e) => ("FEATURE_ERROR", e.to_string(), None),
            AppError::Inference { message, submitted } => (
                "INFERENCE_ERROR",
                message.clone(),
                Some(json!(submitted)),
            ),
        };
        ApiErrorDetail {
            code: code.to_string(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({
            "data": null,
            "meta": ApiMeta::now(uuid::Uuid::now_v7().to_string(), 0),
            "errors": [self.detail()],
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::Validation("age".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Feature(FeatureError::InvalidJob("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        let inference = AppError::Inference {
            message: "boom".into(),
            submitted: SubmittedColumns::new(vec!["Age".into()]),
        };
        assert_eq!(inference.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(inference.detail().code, "INFERENCE_ERROR");
        assert_eq!(
            inference.detail().details,
            Some(json!({"input_columns": ["Age"], "n_cols": 1}))
        );
    }
}
