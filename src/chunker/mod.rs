mod reader;


pub use reader::{Block, BlockReader};

use std::num::NonZeroUsize;

/// Rows per block when the caller does not choose
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(10_000) {
    Some(size) => size,
    None => unreachable!(),
};
