//! InMemorySharedStore - 1 プロセス内の `SharedStore`
//!
//! # 学習ポイント
//! - `Mutex<HashMap>` による排他制御
//! - ロックの poison を `StoreError` として返す（panic させない）

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::StoreError;
use crate::ports::SharedStore;

#[derive(Default)]
pub struct InMemorySharedStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl SharedStore for InMemorySharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.remove(key);
        Ok(())
    }
}
