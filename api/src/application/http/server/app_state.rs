use std::sync::Arc;

use chefai_core::application::ChefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<ChefService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ChefService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }

    pub fn root_path(&self) -> &str {
        &self.args.server.root_path
    }
}
