//! Launcher settings read from the environment.

use thiserror::Error;

pub const HOST_VAR: &str = "FORMKEEP_HOST";
pub const PORT_VAR: &str = "FORMKEEP_PORT";
pub const OPEN_BROWSER_VAR: &str = "FORMKEEP_OPEN_BROWSER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be one of 1/0/true/false/yes/no, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset
    /// or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(host) = read(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = read(PORT_VAR) {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: port.clone(),
            })?;
        }
        if let Some(flag) = read(OPEN_BROWSER_VAR) {
            config.open_browser = parse_flag(&flag).ok_or(ConfigError::InvalidFlag {
                var: OPEN_BROWSER_VAR,
                value: flag.clone(),
            })?;
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]).unwrap(), Config::default());
        assert_eq!(Config::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "3000"),
            (OPEN_BROWSER_VAR, "no"),
        ])
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                host: "0.0.0.0".into(),
                port: 3000,
                open_browser: false,
            }
        );
    }

    #[test]
    fn blank_values_keep_defaults() {
        assert_eq!(config(&[(PORT_VAR, "  ")]).unwrap().port, 8080);
    }

    #[test]
    fn flags_are_case_insensitive() {
        assert!(config(&[(OPEN_BROWSER_VAR, "TRUE")]).unwrap().open_browser);
        assert!(!config(&[(OPEN_BROWSER_VAR, "0")]).unwrap().open_browser);
    }

    #[test]
    fn bad_values_are_errors() {
        assert_eq!(
            config(&[(PORT_VAR, "eighty")]),
            Err(ConfigError::InvalidPort {
                var: PORT_VAR,
                value: "eighty".into(),
            })
        );
        assert!(matches!(
            config(&[(OPEN_BROWSER_VAR, "maybe")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
        assert!(config(&[(PORT_VAR, "70000")]).is_err());
    }
}
