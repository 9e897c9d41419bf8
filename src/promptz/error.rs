use thiserror::Error;

/// Failure reported by a key-value backend on `get` or `set`.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Why a prompt could not be created.
#[derive(Error, Debug)]
pub enum CreateError {
    #[error("Prompt is empty. Enter text before saving.")]
    EmptyInput,

    #[error("This prompt already exists in your library.")]
    DuplicateExists,

    #[error("Could not save prompts. Please try again. ({0})")]
    PersistenceFailed(#[source] BackendError),
}

impl CreateError {
    /// Duplicates are a no-op signal rather than a failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, CreateError::DuplicateExists)
    }
}

#[derive(Error, Debug)]
pub enum DeleteError {
    #[error("Could not save prompts. Please try again. ({0})")]
    PersistenceFailed(#[source] BackendError),
}

#[derive(Error, Debug)]
pub enum PromptzError {
    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Create(#[from] CreateError),

    #[error(transparent)]
    Delete(#[from] DeleteError),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PromptzError>;
