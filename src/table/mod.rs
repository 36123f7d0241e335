
use csv::{Terminator, WriterBuilder};
use std::collections::HashMap;
use std::io::{self, Write};

/// Name of the provenance column appended to every block
pub const FILENAME_COLUMN: &str = "filename";

/// A row of optional cells, positioned by column slot
pub type Row = Vec<Option<String>>;

/// Combined table whose columns are the union of every appended block.
///
/// Column slots are assigned once, in the order names are first seen, and
/// never move. Rows stored before a column existed are simply shorter than
/// the column list; their missing trailing cells read as null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with no columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block of rows laid out by `headers`.
    ///
    /// Unknown header names extend the column set. Cells the block does not
    /// provide stay null. Headers with no rows still register their columns.
    pub fn append(&mut self, headers: &[String], rows: Vec<Row>) {
        let slots: Vec<usize> = headers.iter().map(|name| self.slot_for(name)).collect();
        let width = slots.iter().max().map_or(0, |last| last + 1);

        self.rows.reserve(rows.len());
        for values in rows {
            let mut row = vec![None; width];
            for (&slot, value) in slots.iter().zip(values) {
                row[slot] = value;
            }
            self.rows.push(row);
        }
    }

    fn slot_for(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.positions.get(name) {
            return slot;
        }
        let slot = self.columns.len();
        self.columns.push(name.to_string());
        self.positions.insert(name.to_string(), slot);
        slot
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up one cell; `None` for null cells and unknown rows or columns
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let slot = *self.positions.get(column)?;
        self.rows.get(row)?.get(slot)?.as_deref()
    }

    /// All values of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let slot = *self.positions.get(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(slot).and_then(|cell| cell.as_deref()))
                .collect(),
        )
    }

    /// One row padded to the full column width
    pub fn row(&self, index: usize) -> Option<Vec<Option<&str>>> {
        let row = self.rows.get(index)?;
        Some(
            (0..self.columns.len())
                .map(|slot| row.get(slot).and_then(|cell| cell.as_deref()))
                .collect(),
        )
    }

    /// Serialize as CSV with a leading, unnamed row-index column.
    ///
    /// Nulls are written as empty fields. Lines end with `\n`.
    pub fn write_csv<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut out = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        out.write_record(std::iter::once("").chain(self.columns.iter().map(String::as_str)))?;

        for (index, row) in self.rows.iter().enumerate() {
            out.write_field(index.to_string())?;
            for slot in 0..self.columns.len() {
                let cell = row.get(slot).and_then(|cell| cell.as_deref());
                out.write_field(cell.unwrap_or(""))?;
            }
            out.write_record(None::<&[u8]>)?;
        }

        out.flush()
    }

    /// Render the CSV form into a string
    pub fn to_csv_string(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
