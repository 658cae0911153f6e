use axum::extract::{Query, State};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use shared::{
    adapters::openapi::{API_VERSION_TAG, JsonResponse},
    error::CommonError,
};

use crate::logic::complete::{CompleteRequest, CompleteResponse, complete_text};
use crate::router::TextService;

pub const SERVICE_ROUTE_KEY: &str = "autocomplete";

pub fn create_router() -> OpenApiRouter<Arc<TextService>> {
    OpenApiRouter::new().routes(routes!(route_complete))
}

#[utoipa::path(
    get,
    path = format!("/{}", SERVICE_ROUTE_KEY),
    tags = [SERVICE_ROUTE_KEY, API_VERSION_TAG],
    params(
        CompleteRequest
    ),
    responses(
        (status = 200, description = "Completion suggestions", body = CompleteResponse),
        (status = 400, description = "Bad Request", body = CommonError),
        (status = 500, description = "Internal Server Error", body = CommonError),
    ),
    summary = "Autocomplete text",
    description = "Suggest completions for an incomplete phrase",
    operation_id = "autocomplete-text",
)]
async fn route_complete(
    State(ctx): State<Arc<TextService>>,
    Query(request): Query<CompleteRequest>,
) -> JsonResponse<CompleteResponse, CommonError> {
    let res = complete_text(&ctx.sapling, request).await;
    JsonResponse::from(res)
}
