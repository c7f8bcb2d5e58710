use recycle::RecycleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorizeError {
    #[error(transparent)]
    Recycle(#[from] RecycleError),

    #[error("element {index}: {source}")]
    Element { index: usize, source: RecycleError },

    #[error("vectorized output has length {len}, expected {expected}")]
    OutputLength { len: usize, expected: usize },
}
