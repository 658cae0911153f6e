//! Sapling provider wire types
//!
//! Request and response payloads exchanged with the Sapling API. Response
//! fields are optional so that data the provider omits or sends as null
//! degrades to defaults instead of deserialization failures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for the rephrase endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingRephraseRequest {
    /// Shared-secret credential
    pub key: String,
    /// Text to rephrase
    pub text: String,
    /// Rephrasing mode, e.g. informal to formal
    pub mapping: String,
}

/// Payload for the edits (grammar) endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingEditsRequest {
    pub key: String,
    /// Constant session identifier, not a real per-user session
    pub session_id: String,
    pub text: String,
}

/// Payload for the complete (autocomplete) endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingCompleteRequest {
    pub key: String,
    pub session_id: String,
    pub query: String,
}

/// Payload for the aidetect endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingDetectRequest {
    pub key: String,
    pub text: String,
}

/// Payload for the summarize endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingSummarizeRequest {
    pub key: String,
    pub text: String,
}

/// One rephrasing candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingRephraseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

/// Response from the rephrase endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingRephraseResponse {
    pub results: Option<Vec<SaplingRephraseResult>>,
}

/// Response from the edits endpoint; edits are forwarded opaquely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingEditsResponse {
    pub edits: Option<Vec<Value>>,
}

/// Response from the complete endpoint; suggestions are forwarded opaquely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingCompleteResponse {
    pub suggestions: Option<Vec<Value>>,
}

/// Response from the aidetect endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingDetectResponse {
    pub score: Option<f64>,
}

/// Response from the summarize endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingSummarizeResponse {
    pub result: Option<String>,
}

/// Error body the provider sends on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaplingErrorBody {
    pub msg: Option<String>,
}
