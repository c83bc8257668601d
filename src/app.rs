use crate::controllers::registry::ListingRegistry;
use crate::service::PropertyService;

/// Everything a request handler needs, built once in `main` and shared by
/// reference with every worker.
pub struct App {
    pub svc: PropertyService,
    pub listings: ListingRegistry,
}

impl App {
    pub fn new(svc: PropertyService) -> Self {
        Self {
            svc,
            listings: ListingRegistry::new(),
        }
    }
}
