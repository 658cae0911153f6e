use std::env;

use shared::error::CommonError;
use url::Url;

use crate::logic::client::SAPLING_API_BASE;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Credential and base URL for the Sapling provider
#[derive(Debug, Clone)]
pub struct SaplingConfig {
    pub api_key: String,
    pub base_url: Url,
}

/// Listening and provider configuration, built once at startup and passed
/// into the service explicitly
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub sapling: SaplingConfig,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, CommonError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| CommonError::InvalidRequest {
                msg: format!("PORT must be a valid port number, got {raw:?}"),
                source: Some(anyhow::Error::from(e)),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let host = env::var("HOST").unwrap_or(DEFAULT_HOST.to_string());

        let api_key = match env::var("API_KEY_SAPLING") {
            Ok(key) if !key.is_empty() => key,
            _ => {
                return Err(CommonError::InvalidRequest {
                    msg: "API_KEY_SAPLING is not set. Set it in the environment or in .env before starting the gateway."
                        .to_string(),
                    source: None,
                });
            }
        };

        let base_url = match env::var("SAPLING_API_URL") {
            Ok(raw) => Url::parse(&raw)?,
            Err(_) => Url::parse(SAPLING_API_BASE)?,
        };

        Ok(Self {
            host,
            port,
            sapling: SaplingConfig { api_key, base_url },
        })
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_default_base_url_parses() {
            let url = Url::parse(SAPLING_API_BASE).unwrap();
            assert_eq!(url.as_str(), "https://api.sapling.ai/api/v1");
        }

        #[test]
        fn test_missing_api_key_fails_with_actionable_message() {
            // The only test in this crate that touches the process environment.
            unsafe {
                env::remove_var("PORT");
                env::remove_var("HOST");
                env::remove_var("API_KEY_SAPLING");
            }

            let error = GatewayConfig::from_env().unwrap_err();
            assert!(error.to_string().contains("API_KEY_SAPLING is not set"));
        }
    }
}
