use serde::{Deserialize, Serialize};
use shared::error::CommonError;
use utoipa::{IntoParams, ToSchema};

use crate::logic::{client::SaplingClient, upstream_error};

// Request/Response types
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(style = Form, parameter_in = Query)]
pub struct RephraseRequest {
    /// Informal text to rephrase into formal language
    pub sapling: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RephraseResponse {
    #[serde(rename = "phrase réel", skip_serializing_if = "Option::is_none")]
    pub original_phrase: Option<String>,
    #[serde(rename = "paraphrase", skip_serializing_if = "Option::is_none")]
    pub paraphrase: Option<String>,
}

/// Rephrase informal text into formal language through the provider
pub async fn rephrase_text(
    sapling: &SaplingClient,
    request: RephraseRequest,
) -> Result<RephraseResponse, CommonError> {
    let text = match request.sapling.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err(CommonError::InvalidRequest {
                msg: "Parameter sapling is required".to_string(),
                source: None,
            });
        }
    };

    let response = sapling
        .rephrase(text)
        .await
        .map_err(|e| upstream_error(e, "Error rephrasing text"))?;

    let first = response
        .results
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| CommonError::Upstream {
            msg: "No results from API".to_string(),
            source: None,
        })?;

    Ok(RephraseResponse {
        original_phrase: first.original,
        paraphrase: first.replacement,
    })
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[tokio::test]
        async fn test_missing_parameter_is_rejected() {
            let client = SaplingClient::new(
                "test-key".to_string(),
                url::Url::parse("http://127.0.0.1:1").unwrap(),
            )
            .unwrap();

            let error = rephrase_text(&client, RephraseRequest { sapling: None })
                .await
                .unwrap_err();

            assert_eq!(error.to_string(), "Parameter sapling is required");
        }

        #[tokio::test]
        async fn test_empty_parameter_is_rejected() {
            let client = SaplingClient::new(
                "test-key".to_string(),
                url::Url::parse("http://127.0.0.1:1").unwrap(),
            )
            .unwrap();

            let error = rephrase_text(
                &client,
                RephraseRequest {
                    sapling: Some(String::new()),
                },
            )
            .await
            .unwrap_err();

            assert_eq!(error.to_string(), "Parameter sapling is required");
        }

        #[test]
        fn test_response_omits_absent_fields() {
            let response = RephraseResponse {
                original_phrase: Some("hey wuts up".to_string()),
                paraphrase: None,
            };

            let value = serde_json::to_value(&response).unwrap();
            assert_eq!(value["phrase réel"], "hey wuts up");
            assert!(value.get("paraphrase").is_none());
        }
    }
}
