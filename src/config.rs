use std::env;
use std::path::PathBuf;

/// Bundled defaults, also the only source on wasm builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const SERVER_URL_VAR: &str = "TASKDESK_SERVER_URL";
pub const STORAGE_DIR_VAR: &str = "TASKDESK_STORAGE_DIR";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidServerUrl { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub server_url: String,
    pub storage_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server_url = lookup(SERVER_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        if !(server_url.starts_with("http://") || server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidServerUrl {
                var: SERVER_URL_VAR,
                value: server_url,
            });
        }

        let storage_dir = lookup(STORAGE_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            server_url,
            storage_dir,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if env::var(key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                env::set_var(key, value);
            }
        }
    }
}

fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        line.split_once('=')
            .map(|(key, value)| (key.trim(), value.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (SERVER_URL_VAR, " https://desk.example.com "),
            (STORAGE_DIR_VAR, "/tmp/prefs"),
        ]))
        .unwrap();
        assert_eq!(config.server_url, "https://desk.example.com");
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/prefs")));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = AppConfig::from_lookup(lookup(&[(SERVER_URL_VAR, "ftp://x")])).unwrap_err();
        assert!(err.to_string().contains("ftp://x"));
    }

    #[test]
    fn test_parse_env_lines() {
        let parsed: Vec<_> =
            parse_env_lines("# comment\n\nA=1\n B = two \nnot a pair\n").collect();
        assert_eq!(parsed, vec![("A", "1"), ("B", "two")]);
    }

    #[test]
    fn test_bundled_config_sets_server_url() {
        assert!(
            parse_env_lines(BUNDLED_CONFIG).any(|(key, _)| key == SERVER_URL_VAR),
            "bundled config should define {SERVER_URL_VAR}"
        );
    }
}
