use axum::extract::State;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::trace;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use shared::{
    adapters::openapi::{API_VERSION_TAG, JsonResponse},
    error::CommonError,
};

use crate::router::TextService;

pub const PATH_PREFIX: &str = "/_internal";
pub const API_VERSION_1: &str = "v1";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {}

pub fn create_router() -> OpenApiRouter<Arc<TextService>> {
    OpenApiRouter::new().routes(routes!(route_health))
}

#[utoipa::path(
    get,
    path = format!("{}/{}/health", PATH_PREFIX, API_VERSION_1),
    tags = ["_internal", API_VERSION_TAG],
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    summary = "Health check",
    description = "Check the health status of the gateway",
    operation_id = "health-check",
)]
async fn route_health(
    State(_ctx): State<Arc<TextService>>,
) -> JsonResponse<HealthResponse, CommonError> {
    trace!("Checking health");
    JsonResponse::new_ok(HealthResponse {})
}
