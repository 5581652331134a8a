use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;

use business::application::product::catalog_service::CatalogServiceImpl;
use business::application::product::list_view_model::ProductListViewModel;
use business::domain::product::model::Product;

pub struct DependencyContainer {
    pub view_model: ProductListViewModel,
}

impl DependencyContainer {
    /// Wires the catalog stack over the given seed; an empty seed selects
    /// the built-in demo catalog.
    pub fn new(seed: Vec<Product>) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryInMemory::new(seed));

        let catalog_service = Arc::new(CatalogServiceImpl {
            repository: product_repository,
            logger,
        });

        let view_model = ProductListViewModel::new(catalog_service);

        Self { view_model }
    }
}
