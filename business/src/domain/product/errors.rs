#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("catalog.repository: {0}")]
    Repository(#[from] crate::domain::errors::RepositoryError),
    #[error("catalog.unknown")]
    Unknown,
}
