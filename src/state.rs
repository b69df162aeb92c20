use std::sync::Arc;

use crate::application::services::PageviewService;

#[derive(Clone)]
pub struct AppState {
    pub pageview_service: Arc<PageviewService>,
}

impl AppState {
    pub fn new(pageview_service: Arc<PageviewService>) -> Self {
        Self { pageview_service }
    }
}
