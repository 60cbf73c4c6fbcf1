//! Application state shared by the CLI commands and the HTTP handlers.
//!
//! The model is loaded once here and held behind an `Arc`; every request
//! reads the same immutable service.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use creditform_core::model::classifier::Classifier;
use creditform_core::service::prediction::{Evaluation, Outcome, PredictionService};
use creditform_infra::config::load_app_config;
use creditform_infra::model::artifact::load_model;
use creditform_infra::paths::{resolve_data_dir, resolve_model_path};
use creditform_observe::attrs::{self, Surface};
use creditform_types::applicant::FormAnswers;
use creditform_types::config::AppConfig;
use creditform_types::error::FeatureError;

#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<PredictionService>,
    pub config: Arc<AppConfig>,
    pub data_dir: PathBuf,
    pub model_path: PathBuf,
}

impl AppState {
    /// Resolve paths, read `config.toml`, and load the model artifact.
    ///
    /// A model that cannot be loaded is fatal.
    pub async fn init(model_override: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_app_config(&data_dir).await;
        let model_path = resolve_model_path(model_override, &config);

        let model = load_model(&model_path).await?;
        Ok(Self::from_parts(model, config, data_dir, model_path))
    }

    /// Wire a state around an already loaded model. Runs the schema probe.
    pub fn from_parts(
        model: Arc<dyn Classifier>,
        config: AppConfig,
        data_dir: PathBuf,
        model_path: PathBuf,
    ) -> Self {
        let service = {
            let _span = tracing::info_span!(
                attrs::SPAN_SCHEMA_PROBE,
                creditform.model.kind = model.kind(),
            )
            .entered();
            PredictionService::new(model, config.layout)
        };

        Self {
            prediction_service: Arc::new(service),
            config: Arc::new(config),
            data_dir,
            model_path,
        }
    }

    /// Run one submission through the service inside a prediction span.
    pub fn evaluate(
        &self,
        answers: &FormAnswers,
        surface: Surface,
        request_id: &str,
    ) -> Result<Evaluation, FeatureError> {
        let service = &self.prediction_service;
        let span = tracing::info_span!(
            attrs::SPAN_PREDICTION,
            creditform.surface = surface.as_str(),
            creditform.request_id = request_id,
            creditform.row.layout = %service.layout(),
            creditform.model.kind = service.model().kind(),
            creditform.row.n_cols = tracing::field::Empty,
            creditform.prediction.label = tracing::field::Empty,
            creditform.prediction.probability = tracing::field::Empty,
        );
        let _guard = span.enter();

        let evaluation = service.evaluate(answers)?;
        span.record(attrs::ROW_N_COLS, evaluation.submitted.n_cols);
        if let Outcome::Predicted(prediction) = &evaluation.outcome {
            span.record(attrs::PREDICTED_LABEL, prediction.label.as_str());
            if let Some(p) = prediction.probability {
                span.record(attrs::POSITIVE_PROBABILITY, p);
            }
        }
        Ok(evaluation)
    }
}
