use {crate::series::InputOrder, std::env, std::time::Duration};

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub series_order: InputOrder,
    pub rust_log: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `WALLET_API_URL` (default: http://localhost:3004)
    /// - `REQUEST_TIMEOUT_SECS` (default: 10)
    /// - `SERIES_INPUT_ORDER` (default: newest_first; or unordered)
    /// - `RUST_LOG` (default: info)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = env::var("WALLET_API_URL")
            .unwrap_or_else(|_| "http://localhost:3004".to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "WALLET_API_URL must start with http:// or https://".to_string(),
            ));
        }

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(value) => value.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue(format!("REQUEST_TIMEOUT_SECS must be an integer, got {}", value))
            })?,
            Err(_) => 10,
        };

        let series_order = match env::var("SERIES_INPUT_ORDER") {
            Ok(value) => value.parse::<InputOrder>().map_err(ConfigError::InvalidValue)?,
            Err(_) => InputOrder::default(),
        };

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(request_timeout_secs),
            series_order,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
