//! Span and field names shared by every surface that records a prediction.
//!
//! Usable as field names in `tracing::info_span!` and as OTel attribute keys
//! once spans are bridged by [`crate::tracing_setup`].

/// Span wrapping one form or API submission.
pub const SPAN_PREDICTION: &str = "creditform.prediction";

/// Span wrapping the startup schema probe.
pub const SPAN_SCHEMA_PROBE: &str = "creditform.schema_probe";

/// Which surface received the submission: `form`, `api`, or `cli`.
pub const SURFACE: &str = "creditform.surface";

/// Request id echoed in the JSON envelope.
pub const REQUEST_ID: &str = "creditform.request_id";

/// Row layout submitted to the model (`encoded` or `raw`).
pub const ROW_LAYOUT: &str = "creditform.row.layout";

/// Number of columns submitted.
pub const ROW_N_COLS: &str = "creditform.row.n_cols";

/// Model kind as reported by the artifact.
pub const MODEL_KIND: &str = "creditform.model.kind";

/// Predicted class label.
pub const PREDICTED_LABEL: &str = "creditform.prediction.label";

/// Probability of the positive class, when the model exposes one.
pub const POSITIVE_PROBABILITY: &str = "creditform.prediction.probability";

/// Names which surface a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Form,
    Api,
    Cli,
}

impl Surface {
    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Form => "form",
            Surface::Api => "api",
            Surface::Cli => "cli",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_share_prefix() {
        for name in [
            SURFACE,
            REQUEST_ID,
            ROW_LAYOUT,
            ROW_N_COLS,
            MODEL_KIND,
            PREDICTED_LABEL,
            POSITIVE_PROBABILITY,
        ] {
            assert!(name.starts_with("creditform."), "{name}");
        }
    }

    #[test]
    fn surface_names() {
        assert_eq!(Surface::Form.as_str(), "form");
        assert_eq!(Surface::Api.as_str(), "api");
        assert_eq!(Surface::Cli.as_str(), "cli");
    }
}
