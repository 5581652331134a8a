use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

/// Process-local repository backed by a `Vec` behind one exclusive lock.
///
/// Every operation holds the lock for its whole read or read-modify-write
/// step, so a fetch never observes a half-applied toggle and two toggles on
/// the same id never interleave.
pub struct ProductRepositoryInMemory {
    products: Mutex<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    /// Falls back to the built-in demo catalog when the seed is empty.
    pub fn new(products: Vec<Product>) -> Self {
        let products = if products.is_empty() {
            demo_catalog()
        } else {
            products
        };
        Self {
            products: Mutex::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn fetch_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.lock().await;
        Ok(products.clone())
    }

    async fn toggle_favorite(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NoDataAvailable)?;

        product.is_favorite = !product.is_favorite;
        Ok(product.clone())
    }
}

fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new("Product 1", "Phones", 10.0, false),
        Product::new("Product 2", "Computers", 20.0, true),
        Product::new("Product 3", "Phones", 30.0, false),
        Product::new("iPhone 15 Pro", "Smartphones", 999.00, false),
        Product::new("MacBook Pro 16\"", "Laptops", 2499.00, false),
        Product::new("AirPods Pro", "Audio", 249.00, false),
        Product::new("iPad Air", "Tablets", 599.00, false),
        Product::new("Apple Watch Series 9", "Wearables", 399.00, false),
        Product::new("Magic Keyboard", "Accessories", 99.00, false),
        Product::new("Apple Pencil", "Accessories", 79.00, false),
        Product::new("HomePod mini", "Audio", 99.00, false),
        Product::new("Mac mini", "Desktops", 599.00, false),
        Product::new("AirTag 4 Pack", "Accessories", 99.00, false),
    ]
}
