use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::cliopt::CliOpt;
use crate::error::{Error, Result};
use crate::input::{ChunkReader, DelimReader, SizedReader};
use crate::output::LineWriter;

// ChunkReader == stdin [, delimiter | chunk size]  ->  Vec<u8> chunks
// LineWriter  == chunks  ->  sink, flushed on every '\n'
//
// The chunking of the input is independent of the line structure of the
// output: a chunk may hold several lines, a fraction of one, or both.

/// Builds the input side described by the command line.
pub fn chunk_reader<R: BufRead + 'static>(opt: &CliOpt, input: R) -> Box<dyn ChunkReader> {
    match opt.chunk_size {
        Some(size) => Box::new(SizedReader::new(input, size)),
        None => Box::new(DelimReader::with_delimiter(input, opt.delimiter)),
    }
}

pub struct Runner<W: Write> {
    reader: Box<dyn ChunkReader>,
    writer: LineWriter<W>,
}

impl<W: Write> Runner<W> {
    pub fn new(reader: Box<dyn ChunkReader>, writer: LineWriter<W>) -> Self {
        Self { reader, writer }
    }

    /// Copies the whole input into the writer, flushes it and hands the
    /// sink back.
    pub fn run(mut self) -> Result<W> {
        let mut buf = Vec::new();
        let mut chunks = 0usize;
        let mut bytes = 0usize;

        loop {
            buf.clear();
            match self.reader.read(&mut buf) {
                Ok(0) => break, // EOF
                Ok(_) => (),
                Err(e) => return Err(("input reader failed", e).into()),
            }

            trace!("chunk {}: {} bytes", chunks, buf.len());
            self.writer
                .write_all(&buf)
                .map_err(|e| Error::from(("output writer failed", e)))?;

            chunks += 1;
            bytes += buf.len();
        }

        debug!(
            "copied {} bytes in {} chunks, {} bytes pending final flush",
            bytes,
            chunks,
            self.writer.buffer().len()
        );

        self.writer
            .into_inner()
            .map_err(|e| ("final flush failed", e.into_error()).into())
    }
}
