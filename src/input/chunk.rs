use std::io::{self, BufRead, Read};
use std::num::NonZeroUsize;

/// Source of input chunks. `read` appends the next chunk to `buf` and
/// returns its length; `Ok(0)` means the input is exhausted.
pub trait ChunkReader {
    fn read(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;
}

/// Reads up to and including the next delimiter.
pub struct DelimReader<R> {
    inner: R,
    delim: u8,
}

impl<R: BufRead> DelimReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }

    pub fn with_delimiter(inner: R, delim: u8) -> Self {
        Self { inner, delim }
    }
}

impl<R: BufRead> ChunkReader for DelimReader<R> {
    fn read(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.inner.read_until(self.delim, buf)
    }
}

/// Reads fixed-size chunks, ignoring line boundaries. Only the last chunk
/// may be shorter.
pub struct SizedReader<R> {
    inner: R,
    size: usize,
}

impl<R: Read> SizedReader<R> {
    pub fn new(inner: R, size: NonZeroUsize) -> Self {
        Self {
            inner,
            size: size.get(),
        }
    }
}

impl<R: Read> ChunkReader for SizedReader<R> {
    fn read(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.inner.by_ref().take(self.size as u64).read_to_end(buf)
    }
}
