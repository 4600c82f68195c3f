use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
