use crate::combiner::CombineError;
use crate::table::Row;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;
use std::fs::File;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Upper bound on the row buffer preallocated for one block
const MAX_PREALLOCATED_ROWS: usize = 1024;

/// A bounded run of rows read from one file
#[derive(Debug, Clone)]
pub struct Block {
    /// Position of this block within its file, starting at 0
    pub index: usize,
    /// Rows in source order, laid out by the reader's headers
    pub rows: Vec<Row>,
}

/// Reads a CSV file in blocks of at most `chunk_size` rows.
///
/// Only one block is held in memory at a time. A file with a header row and
/// no records still yields a single empty block so its columns are seen.
/// Rows shorter than the header are kept and their missing trailing cells
/// read as null; rows longer than the header are an error.
pub struct BlockReader {
    path: PathBuf,
    reader: csv::Reader<File>,
    headers: Vec<String>,
    chunk_size: NonZeroUsize,
    record: StringRecord,
    blocks_read: usize,
    finished: bool,
}

impl BlockReader {
    /// Open a CSV file and read its header row
    pub fn open(path: &Path, chunk_size: NonZeroUsize) -> Result<Self, CombineError> {
        let csv_error = |source| CombineError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(csv_error)?;

        let raw_headers = reader.headers().map_err(csv_error)?.clone();
        if raw_headers.is_empty() {
            return Err(CombineError::EmptyHeader {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            headers: normalize_headers(&raw_headers),
            chunk_size,
            record: StringRecord::new(),
            blocks_read: 0,
            finished: false,
        })
    }

    /// Column names for every row this reader yields
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Read the next block, or `None` once the file is exhausted
    pub fn read_block(&mut self) -> Result<Option<Block>, CombineError> {
        if self.finished {
            return Ok(None);
        }

        let limit = self.chunk_size.get();
        let mut rows = Vec::with_capacity(limit.min(MAX_PREALLOCATED_ROWS));

        while rows.len() < limit {
            let more = self
                .reader
                .read_record(&mut self.record)
                .map_err(|source| CombineError::Csv {
                    path: self.path.clone(),
                    source,
                })?;
            if !more {
                self.finished = true;
                break;
            }
            if self.record.len() > self.headers.len() {
                return Err(CombineError::TooManyFields {
                    path: self.path.clone(),
                    line: self.record.position().map_or(0, |pos| pos.line()),
                    expected: self.headers.len(),
                    found: self.record.len(),
                });
            }
            rows.push(self.record.iter().map(cell).collect());
        }

        if rows.is_empty() && self.blocks_read > 0 {
            return Ok(None);
        }

        let block = Block {
            index: self.blocks_read,
            rows,
        };
        self.blocks_read += 1;
        Ok(Some(block))
    }
}

impl Iterator for BlockReader {
    type Item = Result<Block, CombineError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_block() {
            Ok(block) => block.map(Ok),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Empty fields are missing values
fn cell(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

/// Name blank headers `Unnamed: <position>` and suffix repeats with `.1`, `.2`, ...
fn normalize_headers(raw: &StringRecord) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(raw.len());

    for (position, field) in raw.iter().enumerate() {
        let base = if field.is_empty() {
            format!("Unnamed: {}", position)
        } else {
            field.to_string()
        };

        let mut name = base.clone();
        let mut suffix = 0;
        while seen.contains(&name) {
            suffix += 1;
            name = format!("{}.{}", base, suffix);
        }
        seen.insert(name.clone());
        names.push(name);
    }

    names
}
