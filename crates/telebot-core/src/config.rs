use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TelebotError};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub token: String,
    /// Log the name of every invoked operation.
    #[serde(default)]
    pub enable_log: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Whole-request timeout applied to the HTTP client. None leaves it unbounded.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            enable_log: false,
            api_url: default_api_url(),
            timeout_secs: None,
        }
    }
}

impl TelegramConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }
}

impl Config {
    /// Load config: defaults → telebot.toml → env vars (env wins).
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// `load` with the environment supplied by `env`.
    pub fn load_with(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| TelebotError::Config(format!("failed to read config: {e}")))?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };

        if let Some(v) = env("TELEBOT_TOKEN") {
            config.telegram.token = v;
        }
        if let Some(v) = env("TELEBOT_ENABLE_LOG") {
            config.telegram.enable_log = parse_flag(&v)?;
        }
        if let Some(v) = env("TELEBOT_API_URL") {
            config.telegram.api_url = v;
        }

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| TelebotError::Config(format!("failed to parse config: {e}")))
    }

    /// Fails when no token was configured anywhere.
    pub fn require_token(&self) -> Result<&str> {
        if self.telegram.token.is_empty() {
            return Err(TelebotError::Config(
                "telegram token is not set (TELEBOT_TOKEN)".to_string(),
            ));
        }
        Ok(&self.telegram.token)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(TelebotError::Config(format!(
            "invalid boolean for TELEBOT_ENABLE_LOG: {other}"
        ))),
    }
}
