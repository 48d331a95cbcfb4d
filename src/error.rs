use thiserror::Error;

pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("required page element is missing: #{id}")]
    MissingElement { id: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
