use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    #[error("Invalid identifier: {entity} id must not be empty")]
    EmptyIdentifier { entity: &'static str },

    #[error("Invalid {entity} record '{id}': {cause}")]
    InvalidRecord {
        entity: &'static str,
        id: String,
        cause: String,
    },

    #[error("Invalid {entity} field '{field}' for '{id}': {message}")]
    InvalidField {
        entity: &'static str,
        id: String,
        field: &'static str,
        message: String,
    },

    #[error("Catalog load failed for {path}: {cause}")]
    CatalogLoad { path: String, cause: String },
}

impl HelperError {
    /// True for failures caused by bad input on an add operation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HelperError::EmptyIdentifier { .. }
                | HelperError::InvalidRecord { .. }
                | HelperError::InvalidField { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
