use std::sync::Arc;

use opsmeta_core::application::OpsMetaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: OpsMetaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: OpsMetaService) -> Self {
        Self { args, service }
    }
}
