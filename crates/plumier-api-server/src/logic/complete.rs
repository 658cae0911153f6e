use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::error::CommonError;
use utoipa::{IntoParams, ToSchema};

use crate::logic::{client::SaplingClient, upstream_error};

// Request/Response types
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(style = Form, parameter_in = Query)]
pub struct CompleteRequest {
    /// Incomplete phrase to get completion suggestions for
    pub sapling_phras: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompleteResponse {
    #[serde(rename = "phrase incomplète")]
    pub incomplete_phrase: String,
    pub suggestions: Vec<Value>,
    pub status: String,
}

/// Fetch completion suggestions for an incomplete phrase through the provider
pub async fn complete_text(
    sapling: &SaplingClient,
    request: CompleteRequest,
) -> Result<CompleteResponse, CommonError> {
    let query = match request.sapling_phras.as_deref() {
        Some(query) if !query.is_empty() => query,
        _ => {
            return Err(CommonError::InvalidRequest {
                msg: "Parameter sapling_phras is required".to_string(),
                source: None,
            });
        }
    };

    let response = sapling
        .complete(query)
        .await
        .map_err(|e| upstream_error(e, "Error completing text"))?;

    Ok(CompleteResponse {
        incomplete_phrase: query.to_string(),
        suggestions: response.suggestions.unwrap_or_default(),
        status: "success".to_string(),
    })
}
