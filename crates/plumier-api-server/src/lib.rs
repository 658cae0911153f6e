use std::sync::Arc;

use shared::error::CommonError;

use crate::{config::GatewayConfig, router::TextService};

pub mod config;
pub mod logic;
pub mod router;
pub mod types;

#[derive(Clone)]
pub struct ApiService {
    pub text_service: Arc<TextService>,
}

pub struct InitApiServiceParams {
    pub config: GatewayConfig,
}

impl ApiService {
    pub fn new(init_params: InitApiServiceParams) -> Result<Self, CommonError> {
        let text_service = Arc::new(TextService::new(&init_params.config.sapling)?);

        Ok(Self { text_service })
    }
}
