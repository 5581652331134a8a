use async_trait::async_trait;
use uuid::Uuid;

use super::errors::CatalogServiceError;
use super::model::Product;
use super::sort::SortStrategy;

/// Service port for the catalog query/command operations consumed by the
/// list view-model.
///
/// The service never mutates shared state itself; all mutation is delegated
/// to the repository behind it.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn load_products(&self) -> Result<Vec<Product>, CatalogServiceError>;

    /// Case-insensitive substring filter on `name` only. An empty query
    /// returns the input unchanged; input order is always preserved.
    fn search_products(&self, query: &str, products: &[Product]) -> Vec<Product>;

    fn sort_products(&self, products: Vec<Product>, strategy: SortStrategy) -> Vec<Product>;

    async fn toggle_favorite(&self, id: Uuid) -> Result<Product, CatalogServiceError>;
}
