use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("empty data: {0}")]
    EmptyData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("missing dependency: {0}")]
    MissingDependency(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
