//! Sapling API client
//!
//! HTTP client for the Sapling text-processing API. Every gateway operation
//! maps to exactly one outbound call made here.

use std::time::Duration;

use http::StatusCode;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use shared::error::CommonError;
use tracing::{error, trace};
use url::Url;

use crate::types::{
    SaplingCompleteRequest, SaplingCompleteResponse, SaplingDetectRequest, SaplingDetectResponse,
    SaplingEditsRequest, SaplingEditsResponse, SaplingErrorBody, SaplingRephraseRequest,
    SaplingRephraseResponse, SaplingSummarizeRequest, SaplingSummarizeResponse,
};

pub const SAPLING_API_BASE: &str = "https://api.sapling.ai/api/v1";

/// Constant session identifier for the session-scoped Sapling operations.
/// Not tied to any real user session.
pub const SESSION_ID: &str = "test session";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Sapling API
pub struct SaplingClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SaplingClient {
    /// Create a new Sapling client with the given credential and base URL
    pub fn new(api_key: String, base_url: Url) -> Result<Self, CommonError> {
        let client = Client::builder()
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
            ))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key,
            // A bare-origin Url renders with a trailing slash, trim it so
            // endpoint paths join with exactly one separator.
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Rephrase informal text into formal text
    pub async fn rephrase(&self, text: &str) -> Result<SaplingRephraseResponse, SaplingClientError> {
        let request = SaplingRephraseRequest {
            key: self.api_key.clone(),
            text: text.to_string(),
            mapping: "informal_to_formal".to_string(),
        };

        self.post("rephrase", &request).await
    }

    /// Fetch grammar edit suggestions for a text
    pub async fn edits(&self, text: &str) -> Result<SaplingEditsResponse, SaplingClientError> {
        let request = SaplingEditsRequest {
            key: self.api_key.clone(),
            session_id: SESSION_ID.to_string(),
            text: text.to_string(),
        };

        self.post("edits", &request).await
    }

    /// Fetch completion suggestions for an incomplete phrase
    pub async fn complete(&self, query: &str) -> Result<SaplingCompleteResponse, SaplingClientError> {
        let request = SaplingCompleteRequest {
            key: self.api_key.clone(),
            session_id: SESSION_ID.to_string(),
            query: query.to_string(),
        };

        self.post("complete", &request).await
    }

    /// Score a text for the likelihood it was AI-generated
    pub async fn aidetect(&self, text: &str) -> Result<SaplingDetectResponse, SaplingClientError> {
        let request = SaplingDetectRequest {
            key: self.api_key.clone(),
            text: text.to_string(),
        };

        self.post("aidetect", &request).await
    }

    /// Summarize a text
    pub async fn summarize(
        &self,
        text: &str,
    ) -> Result<SaplingSummarizeResponse, SaplingClientError> {
        let request = SaplingSummarizeRequest {
            key: self.api_key.clone(),
            text: text.to_string(),
        };

        self.post("summarize", &request).await
    }

    /// Post a payload to one provider endpoint and interpret the response
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, SaplingClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        trace!(url = %url, "Sending request to Sapling");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(SaplingClientError::Request)?;

        let status = response.status();
        let body_text = response.text().await.map_err(SaplingClientError::Request)?;

        if !status.is_success() {
            let parsed: SaplingErrorBody =
                serde_json::from_str(&body_text).unwrap_or(SaplingErrorBody { msg: None });
            error!(
                status = %status,
                msg = ?parsed.msg,
                "Sapling API error"
            );
            return Err(SaplingClientError::Api {
                status,
                msg: parsed.msg,
            });
        }

        trace!(status = %status, "Sapling request completed");
        serde_json::from_str(&body_text).map_err(|e| SaplingClientError::Parse {
            body: body_text.clone(),
            error: e,
        })
    }
}

/// Errors that can occur when talking to the Sapling API
#[derive(Debug, thiserror::Error)]
pub enum SaplingClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse response: {error}, body: {body}")]
    Parse {
        body: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("Sapling API error ({status})")]
    Api {
        status: StatusCode,
        msg: Option<String>,
    },
}

impl SaplingClientError {
    /// The message the provider reported, when it sent one. An empty
    /// message counts as no message.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            SaplingClientError::Api { msg, .. } => msg.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;
        use httpmock::prelude::*;
        use serde_json::json;

        fn test_client(base_url: &str) -> SaplingClient {
            SaplingClient::new(
                "test-key".to_string(),
                Url::parse(base_url).unwrap(),
            )
            .unwrap()
        }

        #[tokio::test]
        async fn test_rephrase_sends_fixed_payload() {
            let server = MockServer::start();
            let mock = server.mock(|when, then| {
                when.method(Method::POST).path("/rephrase").json_body(json!({
                    "key": "test-key",
                    "text": "hey wuts going on",
                    "mapping": "informal_to_formal"
                }));
                then.status(200).json_body(json!({
                    "results": [{ "original": "hey wuts going on", "replacement": "Hello" }]
                }));
            });

            let client = test_client(&server.base_url());
            let response = client.rephrase("hey wuts going on").await.unwrap();

            mock.assert();
            let results = response.results.unwrap();
            assert_eq!(results[0].replacement.as_deref(), Some("Hello"));
        }

        #[tokio::test]
        async fn test_complete_forwards_query_with_session_id() {
            let server = MockServer::start();
            let mock = server.mock(|when, then| {
                when.method(Method::POST).path("/complete").json_body(json!({
                    "key": "test-key",
                    "session_id": "test session",
                    "query": "Hi how are"
                }));
                then.status(200).json_body(json!({ "suggestions": ["you doing?"] }));
            });

            let client = test_client(&server.base_url());
            let response = client.complete("Hi how are").await.unwrap();

            mock.assert();
            assert_eq!(response.suggestions.unwrap().len(), 1);
        }

        #[tokio::test]
        async fn test_api_error_carries_provider_message() {
            let server = MockServer::start();
            let _mock = server.mock(|when, then| {
                when.method(Method::POST).path("/aidetect");
                then.status(401).json_body(json!({ "msg": "Invalid API key" }));
            });

            let client = test_client(&server.base_url());
            let error = client.aidetect("sample").await.unwrap_err();

            assert_eq!(error.provider_message(), Some("Invalid API key"));
        }

        #[tokio::test]
        async fn test_api_error_with_empty_message_has_no_message() {
            let server = MockServer::start();
            let _mock = server.mock(|when, then| {
                when.method(Method::POST).path("/aidetect");
                then.status(401).json_body(json!({ "msg": "" }));
            });

            let client = test_client(&server.base_url());
            let error = client.aidetect("sample").await.unwrap_err();

            assert!(error.provider_message().is_none());
        }

        #[tokio::test]
        async fn test_api_error_without_body_has_no_message() {
            let server = MockServer::start();
            let _mock = server.mock(|when, then| {
                when.method(Method::POST).path("/summarize");
                then.status(500);
            });

            let client = test_client(&server.base_url());
            let error = client.summarize("sample").await.unwrap_err();

            assert!(error.provider_message().is_none());
        }

        #[tokio::test]
        async fn test_malformed_success_body_is_a_parse_error() {
            let server = MockServer::start();
            let _mock = server.mock(|when, then| {
                when.method(Method::POST).path("/edits");
                then.status(200).body("not json");
            });

            let client = test_client(&server.base_url());
            let error = client.edits("sample").await.unwrap_err();

            assert!(matches!(error, SaplingClientError::Parse { .. }));
        }
    }
}
