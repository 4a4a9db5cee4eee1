// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid value: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Bearer credential for the completions API. Absent means every
    /// ranking cycle fails (and is logged) instead of the app refusing to start.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    /// None keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_COMPLETIONS_URL.to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 200,
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// File path or http(s) URL of the listing catalog.
    pub listings_source: String,
    pub max_workers: usize,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub ranking: RankingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            listings_source: "static/sampleListings.json".to_string(),
            max_workers: 8,
            x_axis_label: "Will".to_string(),
            y_axis_label: "Sam".to_string(),
            ranking: RankingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(v) = get("BIND_ADDR") {
            cfg.bind_addr = parse("BIND_ADDR", v)?;
        }
        if let Some(v) = get("LISTINGS_SOURCE") {
            cfg.listings_source = v;
        }
        if let Some(v) = get("MAX_WORKERS") {
            cfg.max_workers = parse("MAX_WORKERS", v)?;
        }
        if let Some(v) = get("X_AXIS_LABEL") {
            cfg.x_axis_label = v;
        }
        if let Some(v) = get("Y_AXIS_LABEL") {
            cfg.y_axis_label = v;
        }

        cfg.ranking.api_key = get("OPENAI_API_KEY");
        if let Some(v) = get("OPENAI_BASE_URL") {
            cfg.ranking.endpoint = v;
        }
        if let Some(v) = get("RANKING_MODEL") {
            cfg.ranking.model = v;
        }
        if let Some(v) = get("RANKING_MAX_TOKENS") {
            cfg.ranking.max_tokens = parse("RANKING_MAX_TOKENS", v)?;
        }
        if let Some(v) = get("RANKING_TIMEOUT_SECS") {
            let secs: u64 = parse("RANKING_TIMEOUT_SECS", v)?;
            cfg.ranking.timeout = Some(Duration::from_secs(secs));
        }

        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
