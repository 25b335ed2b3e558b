use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default upstream request timeout. Pollinations can take well over a minute
/// to generate a long brief.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct SfxConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub upstream: UpstreamConfig,
}

/// Settings for the remote text-generation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl SfxConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(SfxConfig {
            common,
            upstream: UpstreamConfig {
                url: get_env(
                    "POLLINATIONS_URL",
                    Some("https://text.pollinations.ai/"),
                    is_prod,
                )?,
                model: get_env("POLLINATIONS_MODEL", Some("openai"), is_prod)?,
                timeout_secs: get_env(
                    "POLLINATIONS_TIMEOUT_SECS",
                    Some(&DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
