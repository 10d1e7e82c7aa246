pub mod dump;
pub mod get;
pub mod layout_loader;
pub mod set;
pub mod types;


use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a CLI command, printed as `error: ...`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Data { path: PathBuf, source: binio::Error },

    #[error(transparent)]
    Binio(#[from] binio::Error),
}

pub type CliResult<T> = Result<T, CliError>;

/// Attach the file a data error came from.
pub(crate) fn in_file(path: &std::path::Path) -> impl FnOnce(binio::Error) -> CliError + '_ {
    move |source| CliError::Data {
        path: path.to_path_buf(),
        source,
    }
}
