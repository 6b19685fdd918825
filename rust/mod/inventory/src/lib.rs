pub mod api;
pub mod service;

use std::sync::Arc;

use axum::Router;
use seedstock_core::Module;

use service::InventoryService;

/// Inventory module — the record API over the four entry kinds.
pub struct InventoryModule {
    service: Arc<InventoryService>,
}

impl InventoryModule {
    pub fn new(service: InventoryService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for InventoryModule {
    fn name(&self) -> &str {
        "api"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
