use super::KeyValueBackend;
use crate::error::BackendError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// In-memory key-value backend for testing.
///
/// Nothing is persisted. Reads and writes can be made to fail on demand, and
/// writes can be delayed to widen race windows in concurrency tests.
#[derive(Default)]
pub struct MemBackend {
    values: Mutex<HashMap<String, Value>>,
    simulate_read_error: AtomicBool,
    simulate_write_error: AtomicBool,
    writes: AtomicUsize,
    write_delay: Option<Duration>,
    fail_after_writes: Option<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long inside every `set` before storing the value.
    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = Some(delay);
        self
    }

    /// Fail every `set` once `writes` of them have succeeded.
    pub fn with_failure_after_writes(mut self, writes: usize) -> Self {
        self.fail_after_writes = Some(writes);
        self
    }

    /// Enable read error simulation for testing load failures.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Enable write error simulation for testing rollback.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Store a raw value directly, bypassing error simulation.
    pub fn insert_raw(&self, key: &str, value: Value) {
        self.values().insert(key.to_string(), value);
    }

    /// Current raw value for `key`, bypassing error simulation.
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.values().get(key).cloned()
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, Value>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl KeyValueBackend for MemBackend {
    async fn get(&self, key: &str) -> Result<Option<Value>, BackendError> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("Simulated read error".to_string()));
        }
        Ok(self.values().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), BackendError> {
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
        let exhausted = self
            .fail_after_writes
            .is_some_and(|limit| self.writes.load(Ordering::SeqCst) >= limit);
        if exhausted || self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("Simulated write error".to_string()));
        }
        self.values().insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
