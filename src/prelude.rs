use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorsIsqrt {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
