use std::sync::Arc;

use beautyai_core::application::BeautyAiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<BeautyAiService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BeautyAiService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
