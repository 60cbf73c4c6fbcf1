//! POST /api/v1/predict - Run one set of form answers through the model.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use creditform_core::service::prediction::Outcome;
use creditform_observe::attrs::Surface;
use creditform_types::applicant::FormAnswers;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictView {
    pub input_columns: Vec<String>,
    pub n_cols: usize,
    pub label: String,
    pub probability: Option<f64>,
}

pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<FormAnswers>, JsonRejection>,
) -> Result<ApiResponse<PredictView>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let Json(answers) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    answers.validate()?;

    let evaluation = state.evaluate(&answers, Surface::Api, &request_id)?;
    let prediction = match evaluation.outcome {
        Outcome::Predicted(prediction) => prediction,
        Outcome::Failed { error } => {
            return Err(AppError::Inference {
                message: error,
                submitted: evaluation.submitted,
            });
        }
    };

    let view = PredictView {
        input_columns: evaluation.submitted.input_columns,
        n_cols: evaluation.submitted.n_cols,
        label: prediction.label,
        probability: prediction.probability,
    };

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(view, request_id, elapsed)
        .with_link("self", "/api/v1/predict")
        .with_link("schema", "/api/v1/schema"))
}
