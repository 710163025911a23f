use std::sync::Arc;

use canteen_core::application::CanteenService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CanteenService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CanteenService) -> Self {
        Self { args, service }
    }
}
