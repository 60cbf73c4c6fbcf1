//! Application configuration types for Creditform.
//!
//! `AppConfig` represents the `config.toml` in the data directory. Every
//! field has a default so an empty or missing file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::feature::RowLayout;

/// Smallest and largest number of probability digits the form renders.
pub const MIN_PROBABILITY_PRECISION: usize = 2;
pub const MAX_PROBABILITY_PRECISION: usize = 3;

/// Top-level configuration for the prediction form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model artifact path. Relative paths resolve against the working directory.
    #[serde(default)]
    pub model_path: Option<PathBuf>,

    /// Row shape submitted to the model.
    #[serde(default)]
    pub layout: RowLayout,

    /// Digits shown for the positive-class probability.
    #[serde(default = "default_probability_precision")]
    pub probability_precision: usize,

    /// Address the form server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_probability_precision() -> usize {
    3
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            layout: RowLayout::default(),
            probability_precision: default_probability_precision(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Probability digits clamped to what the form supports.
    pub fn precision(&self) -> usize {
        self.probability_precision
            .clamp(MIN_PROBABILITY_PRECISION, MAX_PROBABILITY_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert!(config.model_path.is_none());
        assert_eq!(config.layout, RowLayout::Encoded);
        assert_eq!(config.probability_precision, 3);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8501);
    }

    #[test]
    fn test_app_config_deserialize_with_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_app_config_deserialize_with_values() {
        let toml_str = r#"
model_path = "/srv/models/credit.json"
layout = "raw"
probability_precision = 2
port = 9000
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.model_path,
            Some(PathBuf::from("/srv/models/credit.json"))
        );
        assert_eq!(config.layout, RowLayout::Raw);
        assert_eq!(config.precision(), 2);
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_precision_is_clamped() {
        let mut config = AppConfig {
            probability_precision: 9,
            ..AppConfig::default()
        };
        assert_eq!(config.precision(), 3);
        config.probability_precision = 0;
        assert_eq!(config.precision(), 2);
    }
}
