use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not find file {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid JSON format")]
    InvalidJson { source: serde_json::Error },

    #[error("invalid solar system description: {source}")]
    Schema { source: serde_json::Error },
}
