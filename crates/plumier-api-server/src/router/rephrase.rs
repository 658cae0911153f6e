use axum::extract::{Query, State};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use shared::{
    adapters::openapi::{API_VERSION_TAG, JsonResponse},
    error::CommonError,
};

use crate::logic::rephrase::{RephraseRequest, RephraseResponse, rephrase_text};
use crate::router::TextService;

pub const SERVICE_ROUTE_KEY: &str = "rephrase";

pub fn create_router() -> OpenApiRouter<Arc<TextService>> {
    OpenApiRouter::new().routes(routes!(route_rephrase))
}

#[utoipa::path(
    get,
    path = format!("/{}", SERVICE_ROUTE_KEY),
    tags = [SERVICE_ROUTE_KEY, API_VERSION_TAG],
    params(
        RephraseRequest
    ),
    responses(
        (status = 200, description = "Rephrased text", body = RephraseResponse),
        (status = 400, description = "Bad Request", body = CommonError),
        (status = 500, description = "Internal Server Error", body = CommonError),
    ),
    summary = "Rephrase text",
    description = "Rephrase informal text into formal language",
    operation_id = "rephrase-text",
)]
async fn route_rephrase(
    State(ctx): State<Arc<TextService>>,
    Query(request): Query<RephraseRequest>,
) -> JsonResponse<RephraseResponse, CommonError> {
    let res = rephrase_text(&ctx.sapling, request).await;
    JsonResponse::from(res)
}
