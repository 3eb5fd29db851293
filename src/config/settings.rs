use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::env;

/// Service tunables. Compiled defaults, overridable from an optional
/// `service_config` file (toml/yaml/json, picked up by extension).
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceProfile {
    pub bind_addr: String,
    pub model_name: String,
}

impl ServiceProfile {
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("bind_addr", "0.0.0.0:8000")?
            .set_default("model_name", "gemini-1.5-flash")?
            .add_source(File::with_name("service_config").required(false))
            .build()?;

        let profile: ServiceProfile = settings.try_deserialize()?;
        Ok(profile)
    }
}

/// Provider credentials and endpoint overrides. Keys are mandatory:
/// without them the service cannot answer anything, so startup aborts.
#[derive(Debug, Clone)]
pub struct Secrets {
    pub newsapi_key: String,
    pub gemini_key: String,
    pub newsapi_base_url: String,
    pub gemini_base_url: String,
}

impl Secrets {
    pub fn from_env() -> Result<Self> {
        let newsapi_key = env::var("NEWSAPI_KEY")
            .context("NEWSAPI_KEY belum diset. Tambahkan di environment.")?;
        let gemini_key = env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY belum diset. Tambahkan di environment.")?;

        Ok(Self {
            newsapi_key,
            gemini_key,
            newsapi_base_url: env::var("NEWSAPI_BASE_URL")
                .unwrap_or("https://newsapi.org".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or("https://generativelanguage.googleapis.com".to_string()),
        })
    }
}
