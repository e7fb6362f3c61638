use std::path::PathBuf;

use thiserror::Error;

pub type MapResult<T> = Result<T, MapError>;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid view configuration: {0}")]
    InvalidConfiguration(String),

    #[error("region `{0}` is not present in the region name index")]
    UnknownRegion(String),

    /// Failure reported by the charting engine behind a surface.
    #[error("chart surface rejected request: {0}")]
    Surface(String),

    #[error("map view controller is already initialized")]
    AlreadyInitialized,

    #[error("map view controller is not initialized")]
    NotInitialized,

    #[error("map view controller has been disposed")]
    Disposed,

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
