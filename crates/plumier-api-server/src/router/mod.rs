use axum::Router;
use shared::adapters::openapi::API_VERSION_TAG;
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{Info, OpenApi};

use crate::ApiService;
use crate::config::SaplingConfig;
use crate::logic::client::SaplingClient;
use shared::error::CommonError;

pub(crate) mod complete;
pub(crate) mod detect;
pub(crate) mod grammar;
pub(crate) mod guide;
pub(crate) mod internal;
pub(crate) mod rephrase;
pub(crate) mod summarize;

/// Shared state for the text operation routers. Every route talks to the
/// provider through the same client.
pub struct TextService {
    pub(crate) sapling: SaplingClient,
}

impl TextService {
    pub fn new(config: &SaplingConfig) -> Result<Self, CommonError> {
        Ok(Self {
            sapling: SaplingClient::new(config.api_key.clone(), config.base_url.clone())?,
        })
    }
}

pub fn initiate_api_router(api_service: ApiService) -> Result<Router, CommonError> {
    let mut router = Router::new();

    // guide router
    let (guide_router, _) = guide::create_router().split_for_parts();
    let guide_router = guide_router.with_state(api_service.text_service.clone());
    router = router.merge(guide_router);

    // rephrase router
    let (rephrase_router, _) = rephrase::create_router().split_for_parts();
    let rephrase_router = rephrase_router.with_state(api_service.text_service.clone());
    router = router.merge(rephrase_router);

    // grammar router
    let (grammar_router, _) = grammar::create_router().split_for_parts();
    let grammar_router = grammar_router.with_state(api_service.text_service.clone());
    router = router.merge(grammar_router);

    // autocomplete router
    let (complete_router, _) = complete::create_router().split_for_parts();
    let complete_router = complete_router.with_state(api_service.text_service.clone());
    router = router.merge(complete_router);

    // detection router
    let (detect_router, _) = detect::create_router().split_for_parts();
    let detect_router = detect_router.with_state(api_service.text_service.clone());
    router = router.merge(detect_router);

    // summarize router
    let (summarize_router, _) = summarize::create_router().split_for_parts();
    let summarize_router = summarize_router.with_state(api_service.text_service.clone());
    router = router.merge(summarize_router);

    // internal router
    let (internal_router, _) = internal::create_router().split_for_parts();
    let internal_router = internal_router.with_state(api_service.text_service);
    router = router.merge(internal_router);

    Ok(router)
}

pub fn generate_openapi_spec() -> OpenApi {
    let (_, mut spec) = guide::create_router().split_for_parts();
    let (_, rephrase_spec) = rephrase::create_router().split_for_parts();
    let (_, grammar_spec) = grammar::create_router().split_for_parts();
    let (_, complete_spec) = complete::create_router().split_for_parts();
    let (_, detect_spec) = detect::create_router().split_for_parts();
    let (_, summarize_spec) = summarize::create_router().split_for_parts();
    let (_, internal_spec) = internal::create_router().split_for_parts();
    spec.merge(rephrase_spec);
    spec.merge(grammar_spec);
    spec.merge(complete_spec);
    spec.merge(detect_spec);
    spec.merge(summarize_spec);
    spec.merge(internal_spec);

    // Update OpenAPI metadata
    let mut info = Info::new("plumier", "A text-processing gateway over the Sapling AI API");
    info.version = "v1".to_string();
    spec.info = info;

    // Add tag descriptions
    spec.tags = Some(vec![
        TagBuilder::new()
            .name(rephrase::SERVICE_ROUTE_KEY)
            .description(Some("Rephrase informal text into formal language"))
            .build(),
        TagBuilder::new()
            .name(grammar::SERVICE_ROUTE_KEY)
            .description(Some("Check a text for grammar and spelling mistakes"))
            .build(),
        TagBuilder::new()
            .name(complete::SERVICE_ROUTE_KEY)
            .description(Some("Suggest completions for an incomplete phrase"))
            .build(),
        TagBuilder::new()
            .name(detect::SERVICE_ROUTE_KEY)
            .description(Some("Score a text for the likelihood it was AI-generated"))
            .build(),
        TagBuilder::new()
            .name(summarize::SERVICE_ROUTE_KEY)
            .description(Some("Summarize a text into a short digest"))
            .build(),
        TagBuilder::new()
            .name(guide::SERVICE_ROUTE_KEY)
            .description(Some("Usage guide listing every gateway route"))
            .build(),
        TagBuilder::new()
            .name("_internal")
            .description(Some("Internal endpoints for health checks"))
            .build(),
        TagBuilder::new()
            .name(API_VERSION_TAG)
            .description(Some("API version v1 endpoints"))
            .build(),
    ]);

    spec
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_openapi_spec_covers_every_route() {
            let spec = generate_openapi_spec();

            for path in [
                "/",
                "/rephrase",
                "/sapling_grammar",
                "/autocomplete",
                "/ai",
                "/summarize",
                "/_internal/v1/health",
            ] {
                assert!(
                    spec.paths.paths.contains_key(path),
                    "missing path {path} in OpenAPI spec"
                );
            }
        }

        #[test]
        fn test_openapi_spec_names_the_gateway() {
            let spec = generate_openapi_spec();
            assert_eq!(spec.info.title, "plumier");
            assert_eq!(spec.info.version, "v1");
        }
    }
}
