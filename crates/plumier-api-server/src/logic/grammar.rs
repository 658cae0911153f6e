use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::error::CommonError;
use utoipa::{IntoParams, ToSchema};

use crate::logic::{client::SaplingClient, upstream_error};

// Request/Response types
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(style = Form, parameter_in = Query)]
pub struct GrammarRequest {
    /// Text to check for grammar and spelling mistakes
    pub edite: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GrammarResponse {
    #[serde(rename = "texte original")]
    pub original_text: String,
    pub corrections: Vec<Value>,
    pub status: String,
}

/// Check a text for grammar mistakes through the provider
pub async fn check_grammar(
    sapling: &SaplingClient,
    request: GrammarRequest,
) -> Result<GrammarResponse, CommonError> {
    let text = match request.edite.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err(CommonError::InvalidRequest {
                msg: "Parameter edite is required".to_string(),
                source: None,
            });
        }
    };

    let response = sapling
        .edits(text)
        .await
        .map_err(|e| upstream_error(e, "Error checking grammar"))?;

    Ok(GrammarResponse {
        original_text: text.to_string(),
        corrections: response.edits.unwrap_or_default(),
        status: "success".to_string(),
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

            let error = check_grammar(&client, GrammarRequest { edite: None })
                .await
                .unwrap_err();

            assert_eq!(error.to_string(), "Parameter edite is required");
        }

        #[test]
        fn test_response_uses_french_labels() {
            let response = GrammarResponse {
                original_text: "Je veut manger".to_string(),
                corrections: vec![],
                status: "success".to_string(),
            };

            let value = serde_json::to_value(&response).unwrap();
            assert_eq!(value["texte original"], "Je veut manger");
            assert_eq!(value["corrections"], serde_json::json!([]));
            assert_eq!(value["status"], "success");
        }
    }
}
