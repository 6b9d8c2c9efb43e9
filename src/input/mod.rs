mod chunk;

pub use chunk::{ChunkReader, DelimReader, SizedReader};
