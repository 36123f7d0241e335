
use crate::combiner::CombineError;
use std::path::{Path, PathBuf};

/// A CSV path that has been checked to exist and hold data
#[derive(Debug, Clone)]
pub struct InputFile {
    /// Path exactly as it was given
    pub path: PathBuf,
    /// Size in bytes at validation time
    pub size: u64,
}

impl InputFile {
    /// Check a single path, existence first and size second.
    ///
    /// Directories count as missing since there is no file to read.
    pub fn check(path: &Path) -> Result<Self, CombineError> {
        let metadata = match path.metadata() {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => {
                return Err(CombineError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
        };

        if metadata.len() == 0 {
            return Err(CombineError::FileSize {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            size: metadata.len(),
        })
    }

    /// Check every path in order, stopping at the first bad one
    pub fn check_all(paths: &[PathBuf]) -> Result<Vec<Self>, CombineError> {
        if paths.is_empty() {
            return Err(CombineError::NoFiles);
        }
        paths.iter().map(|path| Self::check(path)).collect()
    }

    /// Final path segment, used as the provenance value
    pub fn base_name(&self) -> String {
        base_name(&self.path)
    }
}

/// Strip directory components from a path
pub fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
