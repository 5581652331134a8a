use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::product::errors::CatalogServiceError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::CatalogService;
use crate::domain::product::sort::SortStrategy;

pub struct CatalogServiceImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn load_products(&self) -> Result<Vec<Product>, CatalogServiceError> {
        self.logger.info("Loading product catalog");
        let products = self.repository.fetch_all().await?;
        self.logger
            .info(&format!("Loaded {} products", products.len()));
        Ok(products)
    }

    fn search_products(&self, query: &str, products: &[Product]) -> Vec<Product> {
        if query.is_empty() {
            return products.to_vec();
        }

        let lowercased_query = query.to_lowercase();
        products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&lowercased_query))
            .cloned()
            .collect()
    }

    fn sort_products(&self, products: Vec<Product>, strategy: SortStrategy) -> Vec<Product> {
        strategy.sort(products)
    }

    async fn toggle_favorite(&self, id: Uuid) -> Result<Product, CatalogServiceError> {
        self.logger.info(&format!("Toggling favorite: {}", id));
        let product = self.repository.toggle_favorite(id).await.map_err(|e| {
            self.logger
                .warn(&format!("Favorite toggle failed for {}: {}", id, e));
            CatalogServiceError::Repository(e)
        })?;
        Ok(product)
    }
}
