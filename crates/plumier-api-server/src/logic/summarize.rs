use serde::{Deserialize, Serialize};
use shared::error::CommonError;
use utoipa::ToSchema;

use crate::logic::{client::SaplingClient, upstream_error};

const DEFAULT_SUMMARY: &str = "Aucun résumé généré";

/// Longest prefix of the source text echoed back in the response.
const ECHO_LIMIT: usize = 100;

// Request/Response types
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    /// Text to summarize
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummarizeResponse {
    #[serde(rename = "texte original")]
    pub original_text: String,
    #[serde(rename = "résumé")]
    pub summary: String,
    pub status: String,
}

/// Summarize a text through the provider
pub async fn summarize_text(
    sapling: &SaplingClient,
    request: SummarizeRequest,
) -> Result<SummarizeResponse, CommonError> {
    let text = match request.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err(CommonError::InvalidRequest {
                msg: "Parameter text is required in request body".to_string(),
                source: None,
            });
        }
    };

    let response = sapling
        .summarize(text)
        .await
        .map_err(|e| upstream_error(e, "Error summarizing text"))?;

    let summary = response
        .result
        .filter(|result| !result.is_empty())
        .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

    Ok(SummarizeResponse {
        original_text: echo_text(text),
        summary,
        status: "success".to_string(),
    })
}

/// Echo the source text, truncated with an ellipsis when it is long.
fn echo_text(text: &str) -> String {
    if text.chars().count() > ECHO_LIMIT {
        let truncated: String = text.chars().take(ECHO_LIMIT).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_echo_keeps_short_text_intact() {
            let text = "a".repeat(100);
            assert_eq!(echo_text(&text), text);
        }

        #[test]
        fn test_echo_truncates_long_text_with_ellipsis() {
            let text = "a".repeat(101);
            let echoed = echo_text(&text);

            assert_eq!(echoed.chars().count(), 103);
            assert!(echoed.ends_with("..."));
            assert!(echoed.starts_with(&"a".repeat(100)));
        }

        #[test]
        fn test_echo_counts_characters_not_bytes() {
            let text = "é".repeat(101);
            let echoed = echo_text(&text);

            assert_eq!(echoed, format!("{}...", "é".repeat(100)));
        }

        #[tokio::test]
        async fn test_missing_text_is_rejected() {
            let client = SaplingClient::new(
                "test-key".to_string(),
                url::Url::parse("http://127.0.0.1:1").unwrap(),
            )
            .unwrap();

            let error = summarize_text(&client, SummarizeRequest { text: None })
                .await
                .unwrap_err();

            assert_eq!(
                error.to_string(),
                "Parameter text is required in request body"
            );
        }

        #[tokio::test]
        async fn test_empty_text_is_rejected() {
            let client = SaplingClient::new(
                "test-key".to_string(),
                url::Url::parse("http://127.0.0.1:1").unwrap(),
            )
            .unwrap();

            let error = summarize_text(
                &client,
                SummarizeRequest {
                    text: Some(String::new()),
                },
            )
            .await
            .unwrap_err();

            assert_eq!(
                error.to_string(),
                "Parameter text is required in request body"
            );
        }
    }
}
