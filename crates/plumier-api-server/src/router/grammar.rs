use axum::extract::{Query, State};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use shared::{
    adapters::openapi::{API_VERSION_TAG, JsonResponse},
    error::CommonError,
};

use crate::logic::grammar::{GrammarRequest, GrammarResponse, check_grammar};
use crate::router::TextService;

pub const SERVICE_ROUTE_KEY: &str = "sapling_grammar";

pub fn create_router() -> OpenApiRouter<Arc<TextService>> {
    OpenApiRouter::new().routes(routes!(route_grammar))
}

#[utoipa::path(
    get,
    path = format!("/{}", SERVICE_ROUTE_KEY),
    tags = [SERVICE_ROUTE_KEY, API_VERSION_TAG],
    params(
        GrammarRequest
    ),
    responses(
        (status = 200, description = "Grammar corrections", body = GrammarResponse),
        (status = 400, description = "Bad Request", body = CommonError),
        (status = 500, description = "Internal Server Error", body = CommonError),
    ),
    summary = "Check grammar",
    description = "Check a text for grammar and spelling mistakes",
    operation_id = "grammar-check",
)]
async fn route_grammar(
    State(ctx): State<Arc<TextService>>,
    Query(request): Query<GrammarRequest>,
) -> JsonResponse<GrammarResponse, CommonError> {
    let res = check_grammar(&ctx.sapling, request).await;
    JsonResponse::from(res)
}
