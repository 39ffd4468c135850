/// CLI configuration
use crate::error::{AppError, Result};
use jobmatch_client::{ClientConfig, DEFAULT_BASE_URL, LOGIN_ROUTE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "jobmatch.toml";

/// Prefix of environment overrides, e.g. `JOBMATCH_API__BASE_URL`.
pub const ENV_PREFIX: &str = "JOBMATCH";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_session")]
    pub session: SessionSettings,

    #[serde(default = "default_log")]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_login_route")]
    pub login_route: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    /// File holding the access and refresh tokens
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// Fallback filter when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `jobmatch.toml` in the working
    /// directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, environment())
    }

    pub(crate) fn load_with(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        let config = settings.add_source(env).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(AppError::Config(
                "API base URL is required (set JOBMATCH_API__BASE_URL)".to_string(),
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "API base URL must start with http:// or https://, got {}",
                url
            )));
        }

        if self.api.timeout_secs == Some(0) {
            return Err(AppError::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if !self.api.login_route.starts_with('/') {
            return Err(AppError::Config(format!(
                "api.login_route must start with '/', got {}",
                self.api.login_route
            )));
        }

        Ok(())
    }

    /// Client settings derived from the `[api]` section.
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::new(self.api.base_url.clone());
        client.login_route = self.api.login_route.clone();
        if let Some(secs) = self.api.timeout_secs {
            client = client.with_timeout(Duration::from_secs(secs));
        }
        client
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: None,
        login_route: default_login_route(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_login_route() -> String {
    LOGIN_ROUTE.to_string()
}

fn default_session() -> SessionSettings {
    SessionSettings {
        path: default_session_path(),
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from("./.jobmatch/session.json")
}

fn default_log() -> LogSettings {
    LogSettings {
        filter: default_log_filter(),
    }
}

fn default_log_filter() -> String {
    "jobmatch=info,jobmatch_client=info,jobmatch_cli=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            session: default_session(),
            log: default_log(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env() -> config::Environment {
        environment().source(Some(HashMap::new()))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.login_route, "/login");
        assert!(config.api.timeout_secs.is_none());
        assert_eq!(config.session.path, PathBuf::from("./.jobmatch/session.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_fills_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobmatch.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://jobs.example.com/api\"\ntimeout_secs = 30\n",
        )
        .unwrap();

        let config = AppConfig::load_with(Some(&path), no_env()).unwrap();
        assert_eq!(config.api.base_url, "https://jobs.example.com/api");
        assert_eq!(config.api.timeout_secs, Some(30));
        assert_eq!(config.api.login_route, "/login");
        assert_eq!(config.log.filter, default_log_filter());

        let client = config.client_config();
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobmatch.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://file.example.com/api\"\n").unwrap();

        let env = environment().source(Some(HashMap::from([
            (
                "JOBMATCH_API__BASE_URL".to_string(),
                "https://env.example.com/api".to_string(),
            ),
            (
                "JOBMATCH_SESSION__PATH".to_string(),
                "/tmp/jobmatch-session.json".to_string(),
            ),
        ])));

        let config = AppConfig::load_with(Some(&path), env).unwrap();
        assert_eq!(config.api.base_url, "https://env.example.com/api");
        assert_eq!(
            config.session.path,
            PathBuf::from("/tmp/jobmatch-session.json")
        );
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = AppConfig::load_with(Some(Path::new("/no/such/jobmatch.toml")), no_env());
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.api.base_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.api.timeout_secs = Some(0);
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.api.login_route = "login".to_string();
        assert!(config.validate().is_err());
    }
}
