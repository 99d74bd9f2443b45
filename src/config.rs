use crate::model::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
const CONFIG_PATH_VAR: &str = "DEALS_HUB_CONFIG";
const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub supabase_url: String,
    #[serde(default)]
    pub supabase_anon_key: String,
    #[serde(default = "default_products_table")]
    pub products_table: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_products_table() -> String {
    "products".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_output_path() -> String {
    "deals.html".to_string()
}

impl AppConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.supabase_url.trim().is_empty() {
            return Err(ConfigError::Invalid("supabase_url is empty".into()));
        }
        if self.supabase_anon_key.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "supabase_anon_key is empty (set it in the config or via {ANON_KEY_VAR})"
            )));
        }
        if self.products_table.trim().is_empty() {
            return Err(ConfigError::Invalid("products_table is empty".into()));
        }
        Ok(self)
    }
}

/// Resolves the config path: `DEALS_HUB_CONFIG` if set, otherwise `config.json`.
pub fn config_path() -> String {
    env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let key_override = env::var(ANON_KEY_VAR).ok();
    parse_config(&content, key_override)
}

fn parse_config(content: &str, key_override: Option<String>) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = serde_json::from_str(content)?;
    if let Some(key) = key_override.filter(|k| !k.trim().is_empty()) {
        info!("Using anon key from {}", ANON_KEY_VAR);
        config.supabase_anon_key = key;
    }
    config.validate()
}
