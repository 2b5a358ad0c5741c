use thiserror::Error;

use crate::core::NodeId;

pub type EnhancerResult<T> = Result<T, EnhancerError>;

#[derive(Debug, Error)]
pub enum EnhancerError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("storage failure: {0}")]
    Storage(String),

    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("persisted settings are corrupt: {0}")]
    PersistenceCorrupt(String),

    #[error("browser capability unavailable: {capability}")]
    UnsupportedCapability { capability: &'static str },

    #[error("chart node {0} has not been augmented")]
    UnknownChart(NodeId),
}
