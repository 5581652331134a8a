use std::sync::Arc;

use crate::domain::product::model::Product;
use crate::domain::product::services::CatalogService;
use crate::domain::product::sort::SortStrategy;

/// UI-facing state for the product list screen.
///
/// `filtered_products` is derived: always equal to
/// `sort(search(products, search_query), sort_strategy)`. Every command that
/// changes one of the three inputs recomputes it synchronously, so readers
/// only ever observe a consistent projection. The struct is single-writer;
/// only the presentation layer's context calls the mutating commands.
pub struct ProductListViewModel {
    catalog_service: Arc<dyn CatalogService>,
    sort_strategy: SortStrategy,
    products: Vec<Product>,
    filtered_products: Vec<Product>,
    search_query: String,
    is_loading: bool,
    error_message: Option<String>,
}

impl ProductListViewModel {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self::with_sort_strategy(catalog_service, SortStrategy::ByName)
    }

    pub fn with_sort_strategy(
        catalog_service: Arc<dyn CatalogService>,
        sort_strategy: SortStrategy,
    ) -> Self {
        Self {
            catalog_service,
            sort_strategy,
            products: Vec::new(),
            filtered_products: Vec::new(),
            search_query: String::new(),
            is_loading: false,
            error_message: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered_products
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_strategy(&self) -> SortStrategy {
        self.sort_strategy
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Loads the catalog. On failure `products` is left untouched and the
    /// error is surfaced through `error_message`.
    pub async fn fetch_products(&mut self) {
        self.is_loading = true;
        let results = self.catalog_service.load_products().await;
        self.is_loading = false;

        match results {
            Ok(fetched_products) => {
                self.products = fetched_products;
                self.apply_search_and_sort();
            }
            Err(error) => {
                self.error_message = Some(format!("Failed to fetch products: {}", error));
            }
        }
    }

    pub async fn toggle_favorite(&mut self, product: &Product) {
        let results = self.catalog_service.toggle_favorite(product.id).await;

        match results {
            Ok(updated_product) => {
                if let Some(index) = self.products.iter().position(|p| p.id == updated_product.id)
                {
                    self.products[index] = updated_product;
                    self.apply_search_and_sort();
                }
            }
            Err(error) => {
                self.error_message = Some(format!("Failed to update product: {}", error));
            }
        }
    }

    pub fn change_sort_strategy(&mut self, strategy: SortStrategy) {
        self.sort_strategy = strategy;
        self.apply_search_and_sort();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.apply_search_and_sort();
    }

    // Search runs before sort so the ordering applies to the filtered subset.
    fn apply_search_and_sort(&mut self) {
        let list = self
            .catalog_service
            .search_products(&self.search_query, &self.products);
        self.filtered_products = self.catalog_service.sort_products(list, self.sort_strategy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::catalog_service::CatalogServiceImpl;
    use crate::domain::errors::RepositoryError;
    use crate::domain::logger::Logger;
    use crate::domain::product::repository::ProductRepository;
    use crate::domain::product::sort::PriceOrder;
    use async_trait::async_trait;
    use mockall::mock;
    use std::sync::Mutex;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn fetch_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn toggle_favorite(&self, id: Uuid) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    // Real service over a mock repository backed by shared in-test state, so
    // toggles observed by the view-model match what a refetch would return.
    fn view_model_over(fixture: Vec<Product>) -> ProductListViewModel {
        let store = Arc::new(Mutex::new(fixture));

        let mut mock_repo = MockProductRepo::new();
        let fetch_store = store.clone();
        mock_repo
            .expect_fetch_all()
            .returning(move || Ok(fetch_store.lock().unwrap().clone()));
        let toggle_store = store.clone();
        mock_repo.expect_toggle_favorite().returning(move |id| {
            let mut products = toggle_store.lock().unwrap();
            match products.iter_mut().find(|p| p.id == id) {
                Some(product) => {
                    product.is_favorite = !product.is_favorite;
                    Ok(product.clone())
                }
                None => Err(RepositoryError::NoDataAvailable),
            }
        });

        let service = CatalogServiceImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };
        ProductListViewModel::new(Arc::new(service))
    }

    fn fixture() -> Vec<Product> {
        vec![
            Product::new("iPhone 15", "Smartphones", 999.0, false),
            Product::new("Magic Keyboard", "Accessories", 99.0, false),
            Product::new("iPad Air", "Tablets", 599.0, false),
        ]
    }

    #[tokio::test]
    async fn should_populate_products_and_projection_on_fetch() {
        let mut view_model = view_model_over(fixture());

        view_model.fetch_products().await;

        assert_eq!(view_model.products().len(), 3);
        assert_eq!(view_model.filtered_products().len(), 3);
        assert!(!view_model.is_loading());
        assert!(view_model.error_message().is_none());
        // Default strategy sorts by name.
        assert_eq!(view_model.filtered_products()[0].name, "iPad Air");
    }

    #[tokio::test]
    async fn should_surface_error_and_keep_products_when_fetch_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_fetch_all()
            .returning(|| Err(RepositoryError::Unknown("store offline".into())));
        let service = CatalogServiceImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };
        let mut view_model = ProductListViewModel::new(Arc::new(service));

        view_model.fetch_products().await;

        assert!(view_model.products().is_empty());
        assert!(!view_model.is_loading());
        let message = view_model.error_message().unwrap();
        assert!(message.starts_with("Failed to fetch products:"), "{message}");
    }

    #[tokio::test]
    async fn should_recompute_projection_when_query_changes() {
        let mut view_model = view_model_over(fixture());
        view_model.fetch_products().await;
        view_model.change_sort_strategy(SortStrategy::ByPrice(PriceOrder::Ascending));

        // Empty query: projection is the full list, sorted purely by price.
        let prices: Vec<f64> = view_model
            .filtered_products()
            .iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(prices, vec![99.0, 599.0, 999.0]);

        // A query matching exactly one product narrows the projection to it.
        view_model.set_search_query("keyboard");
        assert_eq!(view_model.filtered_products().len(), 1);
        assert_eq!(view_model.filtered_products()[0].name, "Magic Keyboard");

        // Clearing the query restores the full sorted projection.
        view_model.set_search_query("");
        assert_eq!(view_model.filtered_products().len(), 3);
    }

    #[tokio::test]
    async fn should_sort_only_the_filtered_subset() {
        let mut view_model = view_model_over(fixture());
        view_model.fetch_products().await;

        view_model.set_search_query("i");
        view_model.change_sort_strategy(SortStrategy::ByPrice(PriceOrder::Descending));

        let names: Vec<&str> = view_model
            .filtered_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["iPhone 15", "iPad Air", "Magic Keyboard"]);
        // Search runs before sort; no product outside the match set appears.
        view_model.set_search_query("ipad");
        assert_eq!(view_model.filtered_products().len(), 1);
    }

    #[tokio::test]
    async fn should_replace_toggled_product_and_recompute() {
        let mut view_model = view_model_over(fixture());
        view_model.fetch_products().await;
        view_model.change_sort_strategy(SortStrategy::ByFavorite);

        let target = view_model
            .products()
            .iter()
            .find(|p| p.name == "iPad Air")
            .cloned()
            .unwrap();
        view_model.toggle_favorite(&target).await;

        let updated = view_model
            .products()
            .iter()
            .find(|p| p.id == target.id)
            .unwrap();
        assert!(updated.is_favorite);
        assert_eq!(view_model.filtered_products()[0].name, "iPad Air");
        assert!(view_model.error_message().is_none());

        // Toggling again restores the original value.
        view_model.toggle_favorite(&target).await;
        let restored = view_model
            .products()
            .iter()
            .find(|p| p.id == target.id)
            .unwrap();
        assert!(!restored.is_favorite);
    }

    #[tokio::test]
    async fn should_surface_error_when_toggling_unknown_product() {
        let mut view_model = view_model_over(fixture());
        view_model.fetch_products().await;
        let before = view_model.products().to_vec();

        let stale = Product::new("Gone", "Cat", 1.0, false);
        view_model.toggle_favorite(&stale).await;

        assert_eq!(view_model.products(), &before[..]);
        let message = view_model.error_message().unwrap();
        assert!(message.starts_with("Failed to update product:"), "{message}");
    }
}
