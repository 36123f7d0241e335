// Public API exports
pub mod chunker;
pub mod combiner;
pub mod input;
pub mod logging;
pub mod table;

// Re-export main types for convenience
pub use combiner::{CombineError, CombinedState, Combiner};

pub use chunker::{Block, BlockReader, DEFAULT_CHUNK_SIZE};

pub use input::InputFile;

pub use table::{Row, Table, FILENAME_COLUMN};
