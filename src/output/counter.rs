use std::io::{self, Write};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Write calls that reached the sink.
    pub writes: u64,
    /// Bytes the sink accepted.
    pub bytes: u64,
}

/// Pass-through sink keeping track of what reaches the writer it wraps.
pub struct Counted<W> {
    inner: W,
    stats: Stats,
}

impl<W: Write> Counted<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Counted<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.stats.writes += 1;
        self.stats.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
