use axum::extract::{Query, State};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use shared::{
    adapters::openapi::{API_VERSION_TAG, JsonResponse},
    error::CommonError,
};

use crate::logic::detect::{DetectRequest, DetectResponse, detect_ai};
use crate::router::TextService;

pub const SERVICE_ROUTE_KEY: &str = "ai";

pub fn create_router() -> OpenApiRouter<Arc<TextService>> {
    OpenApiRouter::new().routes(routes!(route_detect))
}

#[utoipa::path(
    get,
    path = format!("/{}", SERVICE_ROUTE_KEY),
    tags = [SERVICE_ROUTE_KEY, API_VERSION_TAG],
    params(
        DetectRequest
    ),
    responses(
        (status = 200, description = "AI detection verdict", body = DetectResponse),
        (status = 400, description = "Bad Request", body = CommonError),
        (status = 500, description = "Internal Server Error", body = CommonError),
    ),
    summary = "Detect AI content",
    description = "Score a text for the likelihood it was AI-generated",
    operation_id = "detect-ai",
)]
async fn route_detect(
    State(ctx): State<Arc<TextService>>,
    Query(request): Query<DetectRequest>,
) -> JsonResponse<DetectResponse, CommonError> {
    let res = detect_ai(&ctx.sapling, request).await;
    JsonResponse::from(res)
}
