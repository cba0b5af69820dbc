use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontpatchError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FrontpatchResult<T> = Result<T, FrontpatchError>;
