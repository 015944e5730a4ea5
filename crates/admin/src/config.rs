//! Process configuration from environment variables.

use thiserror::Error;

use shopdesk_observability::LogFormat;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: `{value}`")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub server: ServerConfig,
    /// Backend API base address; request paths resolve beneath it.
    pub api_base_url: String,
    /// Where unauthenticated requests are sent.
    pub login_path: String,
    pub log_format: LogFormat,
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source (tests, alternative loaders).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port_raw = var("PORT", "8080");
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw.clone(),
        })?;

        let api_base_url = var("API_BASE_URL", "http://localhost:5000/api/");
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "API_BASE_URL",
                value: api_base_url,
            });
        }

        let login_path = var("LOGIN_PATH", "/auth/login");
        if !login_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                name: "LOGIN_PATH",
                value: login_path,
            });
        }

        let log_format_raw = var("LOG_FORMAT", "json");
        let log_format = LogFormat::from_name(&log_format_raw).ok_or(ConfigError::Invalid {
            name: "LOG_FORMAT",
            value: log_format_raw.clone(),
        })?;

        Ok(Self {
            server: ServerConfig {
                host: var("HOST", "0.0.0.0"),
                port,
            },
            api_base_url,
            login_path,
            log_format,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
