mod atomic;
mod wordlist;

use atomic::write_bytes_atomic;

pub use wordlist::write_wordlist;

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid output path: {0}")]
    Invalid(String),
}

pub type OutputResult<T> = Result<T, OutputError>;
