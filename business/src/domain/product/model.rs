use uuid::Uuid;

/// Catalog entry as shown in the product list.
///
/// `name` and `price` are accepted as-is: empty names and negative prices are
/// not rejected here. `is_favorite` only ever changes through the repository's
/// toggle operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub is_favorite: bool,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        is_favorite: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            price,
            is_favorite,
        }
    }
}
