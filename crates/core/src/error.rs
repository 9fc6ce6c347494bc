use thiserror::Error;

/// Top-level error type used across the entire workspace.
///
/// Geometry and row packing never fail; these variants only cover the
/// ambient edges (config files, widget stores, argument parsing).
#[derive(Debug, Error)]
pub enum BarError {
    #[error("config error: {0}")]
    Config(String),

    #[error("widget store error: {0}")]
    Store(String),

    #[error("invalid geometry: {0}")]
    Geometry(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BarError> = std::result::Result<T, E>;
