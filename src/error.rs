use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build word set")]
    Fst(#[from] fst::Error),
    #[error("failed to (de)serialize word index")]
    Serialization(#[from] bincode::Error),
    #[error("invalid search config")]
    Config(#[from] serde_json::Error),
    #[error("blank marker must be a single character, got {0:?}")]
    InvalidBlank(String),
}
