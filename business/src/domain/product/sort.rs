use super::model::Product;

/// Direction for the price ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    Ascending,
    Descending,
}

/// Pluggable total order over the product list, selected per view-model and
/// replaceable at runtime.
///
/// Every variant sorts stably: products comparing equal keep their relative
/// input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Ascending, case-insensitive on `name`.
    ByName,
    /// Numeric on `price`, in the given direction.
    ByPrice(PriceOrder),
    /// Favorites strictly before non-favorites.
    ByFavorite,
}

impl SortStrategy {
    pub fn sort(&self, mut products: Vec<Product>) -> Vec<Product> {
        match self {
            SortStrategy::ByName => {
                products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            SortStrategy::ByPrice(PriceOrder::Ascending) => {
                products.sort_by(|a, b| a.price.total_cmp(&b.price));
            }
            SortStrategy::ByPrice(PriceOrder::Descending) => {
                products.sort_by(|a, b| b.price.total_cmp(&a.price));
            }
            SortStrategy::ByFavorite => {
                products.sort_by_key(|p| !p.is_favorite);
            }
        }
        products
    }
}

impl std::fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortStrategy::ByName => write!(f, "name"),
            SortStrategy::ByPrice(PriceOrder::Ascending) => write!(f, "price-asc"),
            SortStrategy::ByPrice(PriceOrder::Descending) => write!(f, "price-desc"),
            SortStrategy::ByFavorite => write!(f, "favorite"),
        }
    }
}

impl std::str::FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortStrategy::ByName),
            "price-asc" => Ok(SortStrategy::ByPrice(PriceOrder::Ascending)),
            "price-desc" => Ok(SortStrategy::ByPrice(PriceOrder::Descending)),
            "favorite" => Ok(SortStrategy::ByFavorite),
            _ => Err(format!("Invalid sort strategy: {}", s)),
        }
    }
}
