//! Error type shared by the loader and the report writer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// An input file could not be opened or read.
    #[error("could not read '{}': {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the result table failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::SourceUnreadable {
            path: path.into(),
            source,
        }
    }
}
