use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::AppError;
use crate::repositories::backend::KeyValueBackend;

/// Ephemeral substrate for tests and dry runs. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.inner.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.inner.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.inner.lock().remove(key);
        Ok(())
    }
}
