/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.no_data_available")]
    NoDataAvailable,
    #[error("repository.unknown: {0}")]
    Unknown(String),
}

impl RepositoryError {
    pub fn no_data_available() -> Self {
        RepositoryError::NoDataAvailable
    }
    pub fn unknown(detail: impl Into<String>) -> Self {
        RepositoryError::Unknown(detail.into())
    }
}
