use serde::{Deserialize, Serialize};
use tictactoe_engine::GameMode;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: GameMode,
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            seed: None,
            log_prefix: None,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix {
            if prefix.is_empty() {
                return Err("log_prefix must not be empty when set".to_string());
            }
        }
        Ok(())
    }
}

/// Loads the YAML config, falling back to defaults when the file does not
/// exist.
pub fn load_config(path: &str) -> Result<Config, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(format!("Failed to read config file {path}: {err}")),
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|err| format!("Failed to parse config file {path}: {err}"))?;

    config
        .validate()
        .map_err(|err| format!("Config validation error: {err}"))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config("definitely_not_a_real_config_file.yaml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.mode, GameMode::Classic);
    }

    #[test]
    fn test_parses_full_config() {
        let config: Config = serde_yaml_ng::from_str(
            "mode: random\nseed: 42\nlog_prefix: Game\n",
        )
        .unwrap();

        assert_eq!(config.mode, GameMode::Random);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_prefix.as_deref(), Some("Game"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let config: Config = serde_yaml_ng::from_str("mode: classic\n").unwrap();
        assert_eq!(config.mode, GameMode::Classic);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_prefix, None);
    }

    #[test]
    fn test_empty_log_prefix_fails_validation() {
        let config = Config {
            log_prefix: Some(String::new()),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
