use crate::errors::AppError;

/// Persistent key-value substrate under the record store. One opaque
/// string value per partition key. Failures surface as
/// `AppError::StorageUnavailable` rather than degrading to silent
/// empty reads or no-op writes.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
