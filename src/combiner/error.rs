use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CombineError {
    #[error("No files given to parse")]
    NoFiles,

    #[error("Could not locate the file: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("The given file contains no data: {}", path.display())]
    FileSize { path: PathBuf },

    #[error("No combined table to print")]
    NoValue,

    #[error("No columns to parse from file: {}", path.display())]
    EmptyHeader { path: PathBuf },

    #[error(
        "Too many fields in {} on line {line}: expected {expected}, found {found}",
        path.display()
    )]
    TooManyFields {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Failed to read CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write CSV: {0}")]
    Io(#[from] std::io::Error),
}
