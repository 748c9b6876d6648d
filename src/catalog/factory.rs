use std::sync::Arc;
use tokio::sync::Mutex;
use crate::catalog::domain::{CatalogService, SharedCatalog};
use crate::catalog::domain::model::Catalog;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;

pub fn create_shared_catalog() -> SharedCatalog {
    Arc::new(Mutex::new(Catalog::new()))
}

pub(crate) fn create_catalog_service(config: &Configuration, catalog: SharedCatalog,
                                     publisher: Arc<dyn EventPublisher>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, catalog, publisher))
}
