use shared::error::CommonError;

use crate::logic::client::SaplingClientError;

pub mod client;
pub mod complete;
pub mod detect;
pub mod grammar;
pub mod rephrase;
pub mod summarize;

/// Convert a provider failure into the gateway error, preferring the
/// message the provider reported over the operation fallback.
pub(crate) fn upstream_error(error: SaplingClientError, fallback: &str) -> CommonError {
    let msg = error.provider_message().unwrap_or(fallback).to_string();
    CommonError::Upstream {
        msg,
        source: Some(anyhow::Error::from(error)),
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;
        use http::StatusCode;

        #[test]
        fn test_upstream_error_prefers_provider_message() {
            let error = SaplingClientError::Api {
                status: StatusCode::UNAUTHORIZED,
                msg: Some("Invalid API key".to_string()),
            };

            let common = upstream_error(error, "Error rephrasing text");
            assert_eq!(common.to_string(), "Invalid API key");
        }

        #[test]
        fn test_upstream_error_falls_back_without_provider_message() {
            let error = SaplingClientError::Api {
                status: StatusCode::BAD_GATEWAY,
                msg: None,
            };

            let common = upstream_error(error, "Error checking grammar");
            assert_eq!(common.to_string(), "Error checking grammar");
        }

        #[test]
        fn test_upstream_error_falls_back_on_empty_provider_message() {
            let error = SaplingClientError::Api {
                status: StatusCode::UNAUTHORIZED,
                msg: Some(String::new()),
            };

            let common = upstream_error(error, "Error detecting AI content");
            assert_eq!(common.to_string(), "Error detecting AI content");
        }
    }
}
