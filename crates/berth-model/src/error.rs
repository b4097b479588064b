use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid input formatting: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("cannot encode properties: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
