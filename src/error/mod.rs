mod compile;
mod index;
mod io;

pub use compile::CompilationError;
pub use index::IndexError;
pub use io::IoError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Compilation(#[from] CompilationError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

pub type Result<T> = std::result::Result<T, Error>;
