use serde::{Deserialize, Serialize};
use shared::error::CommonError;
use utoipa::{IntoParams, ToSchema};

use crate::logic::{client::SaplingClient, upstream_error};

const AI_VERDICT: &str = "Probablement généré par IA";
const HUMAN_VERDICT: &str = "Probablement écrit par un humain";

// Request/Response types
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(style = Form, parameter_in = Query)]
pub struct DetectRequest {
    /// Text to score for AI-generated content
    pub detection: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DetectResponse {
    #[serde(rename = "texte analysé")]
    pub analyzed_text: String,
    #[serde(rename = "score IA")]
    pub ai_score: f64,
    #[serde(rename = "probabilité IA")]
    pub ai_probability: String,
    pub verdict: String,
    pub status: String,
}

/// Score a text for the likelihood it was AI-generated
pub async fn detect_ai(
    sapling: &SaplingClient,
    request: DetectRequest,
) -> Result<DetectResponse, CommonError> {
    let text = match request.detection.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err(CommonError::InvalidRequest {
                msg: "Parameter detection is required".to_string(),
                source: None,
            });
        }
    };

    let response = sapling
        .aidetect(text)
        .await
        .map_err(|e| upstream_error(e, "Error detecting AI content"))?;

    let score = response.score.unwrap_or(0.0);

    Ok(DetectResponse {
        analyzed_text: text.to_string(),
        ai_score: score,
        ai_probability: probability_label(response.score),
        verdict: verdict_label(score).to_string(),
        status: "success".to_string(),
    })
}

/// Render the score as a percentage with two decimals. An absent or zero
/// score renders as a plain "0%".
fn probability_label(score: Option<f64>) -> String {
    match score {
        Some(score) if score != 0.0 => format!("{:.2}%", score * 100.0),
        _ => "0%".to_string(),
    }
}

fn verdict_label(score: f64) -> &'static str {
    if score > 0.5 { AI_VERDICT } else { HUMAN_VERDICT }
}
