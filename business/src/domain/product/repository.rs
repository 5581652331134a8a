use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Port for the component owning the canonical product list.
///
/// Implementations must serialize `fetch_all` and `toggle_favorite` against
/// each other so a fetch never observes a half-applied toggle.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns a snapshot of the current list.
    async fn fetch_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Flips `is_favorite` on the product with the given id and returns the
    /// updated value. Fails with `NoDataAvailable` for unknown ids.
    async fn toggle_favorite(&self, id: Uuid) -> Result<Product, RepositoryError>;
}
