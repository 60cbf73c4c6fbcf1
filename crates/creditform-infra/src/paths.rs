//! Data directory and model path resolution.

use std::path::{Path, PathBuf};

use creditform_types::config::AppConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CREDITFORM_DATA_DIR";

/// Environment variable overriding the model artifact path.
pub const MODEL_ENV: &str = "CREDITFORM_MODEL";

/// Model artifact looked up when nothing else names one.
pub const DEFAULT_MODEL_FILE: &str = "model.json";

/// Resolve the data directory.
///
/// Priority: `CREDITFORM_DATA_DIR`, then `~/.creditform`, then `./.creditform`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".creditform");
    }

    PathBuf::from(".creditform")
}

/// Resolve the model artifact path.
///
/// Priority: the `--model` flag, `CREDITFORM_MODEL`, `model_path` in
/// `config.toml`, then `./model.json`.
pub fn resolve_model_path(cli: Option<&Path>, config: &AppConfig) -> PathBuf {
    let env = std::env::var_os(MODEL_ENV).map(PathBuf::from);
    pick_model_path(cli, env, config)
}

fn pick_model_path(cli: Option<&Path>, env: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    cli.map(Path::to_path_buf)
        .or(env)
        .or_else(|| config.model_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(path: Option<&str>) -> AppConfig {
        AppConfig {
            model_path: path.map(PathBuf::from),
            ..AppConfig::default()
        }
    }

    #[test]
    fn cli_flag_wins() {
        let picked = pick_model_path(
            Some(Path::new("cli.json")),
            Some(PathBuf::from("env.json")),
            &config_with(Some("config.json")),
        );
        assert_eq!(picked, PathBuf::from("cli.json"));
    }

    #[test]
    fn env_beats_config() {
        let picked = pick_model_path(
            None,
            Some(PathBuf::from("env.json")),
            &config_with(Some("config.json")),
        );
        assert_eq!(picked, PathBuf::from("env.json"));
    }

    #[test]
    fn config_then_default() {
        assert_eq!(
            pick_model_path(None, None, &config_with(Some("config.json"))),
            PathBuf::from("config.json")
        );
        assert_eq!(
            pick_model_path(None, None, &config_with(None)),
            PathBuf::from("model.json")
        );
    }
}
