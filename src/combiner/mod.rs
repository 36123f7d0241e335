mod error;
mod state;


pub use error::CombineError;
pub use state::CombinedState;

use crate::chunker::BlockReader;
use crate::input::InputFile;
use crate::table::{Row, Table, FILENAME_COLUMN};
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Concatenates CSV files into one table tagged with each row's source file
#[derive(Debug, Clone)]
pub struct Combiner {
    /// Input paths, combined in this order
    pub files: Vec<PathBuf>,
    /// Maximum rows held per read
    pub chunk_size: NonZeroUsize,
    /// Result of the last successful combine
    pub combined: CombinedState,
    printed: bool,
}

impl Combiner {
    /// Store the inputs verbatim; paths are not checked until `combine`
    pub fn new(files: Vec<PathBuf>, chunk_size: NonZeroUsize) -> Self {
        Self {
            files,
            chunk_size,
            combined: CombinedState::Unset,
            printed: false,
        }
    }

    /// Validate every input, then read and union them into `combined`.
    ///
    /// On any error `combined` keeps its previous value.
    pub fn combine(&mut self) -> Result<(), CombineError> {
        let inputs = InputFile::check_all(&self.files)?;
        debug!(files = inputs.len(), "validated input files");

        let mut table = Table::new();
        for input in &inputs {
            self.merge_file(&mut table, input)?;
        }

        info!(
            files = inputs.len(),
            rows = table.row_count(),
            columns = table.column_count(),
            "combined CSV files"
        );
        self.combined = CombinedState::Table(table);
        Ok(())
    }

    fn merge_file(&self, table: &mut Table, input: &InputFile) -> Result<(), CombineError> {
        let filename = input.base_name();
        let mut reader = BlockReader::open(&input.path, self.chunk_size)?;
        let (headers, filename_slot) = with_filename_column(reader.headers());

        while let Some(block) = reader.read_block()? {
            debug!(
                file = %filename,
                block = block.index,
                rows = block.rows.len(),
                "read block"
            );
            let rows = tag_rows(block.rows, filename_slot, &filename);
            table.append(&headers, rows);
        }

        Ok(())
    }

    /// Write the combined table as CSV to standard output
    pub fn print(&mut self) -> Result<(), CombineError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)
    }

    /// Write the combined table as CSV to `writer`.
    ///
    /// Nothing is written unless a table is held.
    pub fn write_to<W: Write>(&mut self, writer: W) -> Result<(), CombineError> {
        let table = self.combined.as_table().ok_or(CombineError::NoValue)?;
        table.write_csv(writer)?;
        self.printed = true;
        Ok(())
    }

    /// Whether a print has ever succeeded
    pub fn has_printed(&self) -> bool {
        self.printed
    }

    /// The combined table, if a combine has succeeded
    pub fn table(&self) -> Option<&Table> {
        self.combined.as_table()
    }
}

/// Append the provenance column unless the file already has one to overwrite
fn with_filename_column(headers: &[String]) -> (Vec<String>, usize) {
    let mut headers = headers.to_vec();
    let slot = match headers.iter().position(|h| h == FILENAME_COLUMN) {
        Some(slot) => slot,
        None => {
            headers.push(FILENAME_COLUMN.to_string());
            headers.len() - 1
        }
    };
    (headers, slot)
}

fn tag_rows(mut rows: Vec<Row>, slot: usize, filename: &str) -> Vec<Row> {
    for row in &mut rows {
        if row.len() <= slot {
            row.resize(slot + 1, None);
        }
        row[slot] = Some(filename.to_string());
    }
    rows
}
