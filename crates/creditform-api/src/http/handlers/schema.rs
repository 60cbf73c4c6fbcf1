//! GET /api/v1/schema - Diagnostic readout of the model's declared columns.

use std::time::Instant;

use axum::extract::State;
use serde::Serialize;

use creditform_types::feature::RowLayout;
use creditform_types::schema::SchemaReport;

use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SchemaView {
    pub model_kind: String,
    pub layout: RowLayout,
    pub report: SchemaReport,
    pub summary: String,
    /// Columns an encoded row will carry: declared, or the fallback list.
    pub effective_columns: Vec<String>,
}

impl SchemaView {
    pub fn from_state(state: &AppState) -> Self {
        let service = &state.prediction_service;
        Self {
            model_kind: service.model().kind().to_string(),
            layout: service.layout(),
            report: service.schema().clone(),
            summary: service.schema().summary(),
            effective_columns: service.effective_columns(),
        }
    }
}

pub async fn get_schema(State(state): State<AppState>) -> ApiResponse<SchemaView> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let view = SchemaView::from_state(&state);

    let elapsed = start.elapsed().as_millis() as u64;
    ApiResponse::success(view, request_id, elapsed)
        .with_link("self", "/api/v1/schema")
        .with_link("predict", "/api/v1/predict")
}
