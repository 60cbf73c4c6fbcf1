//! Application configuration loader.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`AppConfig`]. A missing or malformed file never stops the form from
//! starting: the loader logs and falls back to defaults.

use std::path::Path;

use creditform_types::config::AppConfig;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`AppConfig::default()`].
/// - Unreadable or unparsable file: logs a warning, returns the default.
pub async fn load_app_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => {
            if config.precision() != config.probability_precision {
                tracing::warn!(
                    requested = config.probability_precision,
                    applied = config.precision(),
                    "probability_precision out of range, clamping"
                );
            }
            config
        }
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditform_types::feature::RowLayout;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_app_config(tmp.path()).await;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8501);
    }

    #[tokio::test]
    async fn valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
model_path = "/srv/models/credit.json"
layout = "raw"
probability_precision = 2
port = 9000
"#,
        )
        .await
        .unwrap();

        let config = load_app_config(tmp.path()).await;
        assert_eq!(
            config.model_path.as_deref(),
            Some(Path::new("/srv/models/credit.json"))
        );
        assert_eq!(config.layout, RowLayout::Raw);
        assert_eq!(config.precision(), 2);
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_app_config(tmp.path()).await;
        assert_eq!(config, AppConfig::default());
    }
}
