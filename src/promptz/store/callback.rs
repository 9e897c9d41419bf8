use super::KeyValueBackend;
use crate::error::BackendError;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::oneshot;

pub type GetCallback = Box<dyn FnOnce(Result<Option<Value>, BackendError>) + Send>;
pub type SetCallback = Box<dyn FnOnce(Result<(), BackendError>) + Send>;

/// Storage that reports completion through a callback instead of a future.
///
/// Implementations call `done` exactly once, from any thread.
pub trait CallbackStorage: Send + Sync {
    fn get(&self, key: &str, done: GetCallback);

    fn set(&self, key: &str, value: Value, done: SetCallback);
}

/// Presents a [`CallbackStorage`] as a [`KeyValueBackend`].
pub struct CallbackAdapter<C> {
    inner: C,
}

impl<C: CallbackStorage> CallbackAdapter<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

fn dropped_callback() -> BackendError {
    BackendError::Unavailable("storage dropped the completion callback".to_string())
}

#[async_trait]
impl<C: CallbackStorage> KeyValueBackend for CallbackAdapter<C> {
    async fn get(&self, key: &str) -> Result<Option<Value>, BackendError> {
        let (tx, rx) = oneshot::channel();
        self.inner.get(
            key,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        );
        rx.await.map_err(|_| dropped_callback())?
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), BackendError> {
        let (tx, rx) = oneshot::channel();
        self.inner.set(
            key,
            value,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        );
        rx.await.map_err(|_| dropped_callback())?
    }
}
