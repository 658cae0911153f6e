use axum::extract::{Json, State};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use shared::{
    adapters::openapi::{API_VERSION_TAG, JsonResponse},
    error::CommonError,
};

use crate::logic::summarize::{SummarizeRequest, SummarizeResponse, summarize_text};
use crate::router::TextService;

pub const SERVICE_ROUTE_KEY: &str = "summarize";

pub fn create_router() -> OpenApiRouter<Arc<TextService>> {
    OpenApiRouter::new().routes(routes!(route_summarize))
}

#[utoipa::path(
    post,
    path = format!("/{}", SERVICE_ROUTE_KEY),
    tags = [SERVICE_ROUTE_KEY, API_VERSION_TAG],
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Summary of the text", body = SummarizeResponse),
        (status = 400, description = "Bad Request", body = CommonError),
        (status = 500, description = "Internal Server Error", body = CommonError),
    ),
    summary = "Summarize text",
    description = "Summarize a text into a short digest",
    operation_id = "summarize-text",
)]
async fn route_summarize(
    State(ctx): State<Arc<TextService>>,
    Json(request): Json<SummarizeRequest>,
) -> JsonResponse<SummarizeResponse, CommonError> {
    let res = summarize_text(&ctx.sapling, request).await;
    JsonResponse::from(res)
}
