use std::error;
use std::fmt;
use std::io::{self, BufWriter, IntoInnerError, Write};

const NEWLINE: u8 = b'\n';

/// A sink failure together with the number of bytes the `LineWriter`
/// committed before it happened.
#[derive(Debug)]
pub struct ShortWrite {
    written: usize,
    error: io::Error,
}

impl ShortWrite {
    fn new(written: usize, error: io::Error) -> Self {
        Self { written, error }
    }

    /// Bytes accepted into the buffer (and possibly already flushed)
    /// before the failure.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn error(&self) -> &io::Error {
        &self.error
    }

    pub fn into_error(self) -> io::Error {
        self.error
    }
}

impl fmt::Display for ShortWrite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "short write after {} bytes: {}", self.written, self.error)
    }
}

impl error::Error for ShortWrite {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<ShortWrite> for io::Error {
    fn from(err: ShortWrite) -> Self {
        err.error
    }
}

/// Wraps a writer and buffers its output, flushing whenever a newline
/// (`0x0a`) is written.
///
/// Like [`BufWriter`], which it is built on, the buffer is also flushed when
/// it runs out of capacity. Bytes after the last newline stay buffered, so
/// call [`flush`](Write::flush) once all data has been written. Dropping the
/// writer flushes on a best-effort basis and swallows errors.
///
/// The writer owns whatever it is given. Pass `&mut sink` to keep ownership
/// of the sink with the caller.
pub struct LineWriter<W: Write> {
    buffer: BufWriter<W>,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            buffer: BufWriter::new(inner),
        }
    }

    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        Self {
            buffer: BufWriter::with_capacity(capacity, inner),
        }
    }

    /// Writes the contents of `buf`, flushing after every newline.
    ///
    /// Returns the number of bytes accepted. Processing stops at the first
    /// append or flush failure; the returned [`ShortWrite`] tells how many
    /// bytes were committed before it. Nothing after the failing segment is
    /// written.
    ///
    /// A complete line left behind by an earlier failed flush is flushed
    /// first; if that fails again nothing of `buf` is written.
    pub fn write_lines(&mut self, buf: &[u8]) -> Result<usize, ShortWrite> {
        if self.buffer().last() == Some(&NEWLINE) {
            self.buffer.flush().map_err(|e| ShortWrite::new(0, e))?;
        }

        let mut written = 0;
        for segment in buf.split_inclusive(|&b| b == NEWLINE) {
            let flush = segment.last() == Some(&NEWLINE);
            self.passthrough(segment, flush, &mut written)?;
        }
        Ok(written)
    }

    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_lines(&[byte])?;
        Ok(())
    }

    /// Writes the UTF-8 encoding of `c` and returns its size in bytes.
    pub fn write_char(&mut self, c: char) -> Result<usize, ShortWrite> {
        let mut buf = [0; 4];
        self.write_lines(c.encode_utf8(&mut buf).as_bytes())
    }

    /// Writes a raw code point. Surrogates and values past U+10FFFF are
    /// written as U+FFFD.
    pub fn write_rune(&mut self, rune: u32) -> Result<usize, ShortWrite> {
        self.write_char(std::char::from_u32(rune).unwrap_or(std::char::REPLACEMENT_CHARACTER))
    }

    pub fn write_str(&mut self, s: &str) -> Result<usize, ShortWrite> {
        self.write_lines(s.as_bytes())
    }

    pub fn get_ref(&self) -> &W {
        self.buffer.get_ref()
    }

    pub fn get_mut(&mut self) -> &mut W {
        self.buffer.get_mut()
    }

    /// Bytes written but not yet forwarded to the sink.
    pub fn buffer(&self) -> &[u8] {
        self.buffer.buffer()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Flushes the buffer and returns the sink.
    pub fn into_inner(self) -> Result<W, IntoInnerError<BufWriter<W>>> {
        self.buffer.into_inner()
    }

    // Appends the whole segment to the buffer, then optionally flushes it.
    fn passthrough(
        &mut self,
        mut segment: &[u8],
        flush: bool,
        written: &mut usize,
    ) -> Result<(), ShortWrite> {
        while !segment.is_empty() {
            match self.buffer.write(segment) {
                Ok(0) => {
                    return Err(ShortWrite::new(
                        *written,
                        io::Error::new(io::ErrorKind::WriteZero, "failed to buffer segment"),
                    ));
                }
                Ok(n) => {
                    *written += n;
                    segment = &segment[n..];
                }
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(ShortWrite::new(*written, e)),
            }
        }

        if flush {
            self.buffer
                .flush()
                .map_err(|e| ShortWrite::new(*written, e))?;
        }
        Ok(())
    }
}

/// A failure after some bytes were committed is reported as a short write.
/// Those bytes stay buffered, and the next `write` or `flush` retries them
/// and returns the sink error if it persists.
impl<W: Write> Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.write_lines(buf) {
            Ok(n) => Ok(n),
            Err(short) if short.written > 0 => Ok(short.written),
            Err(short) => Err(short.error),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.buffer.flush()
    }
}

impl<W: Write + fmt::Debug> fmt::Debug for LineWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("writer", self.get_ref())
            .field(
                "buffer",
                &format_args!("{}/{}", self.buffer().len(), self.capacity()),
            )
            .finish()
    }
}
