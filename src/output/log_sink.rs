use std::io::{self, Write};

use log::Level;

use super::writer::LineWriter;

/// Sink that turns every write it receives into one log record.
///
/// Log records are lines of their own, so writers that do not emit whole
/// lines produce ragged output. Put a [`LineWriter`] in front (see
/// [`log_writer`]) to get exactly one record per line.
#[derive(Debug, Clone)]
pub struct LogSink {
    target: String,
    level: Level,
}

impl LogSink {
    pub fn new(level: Level) -> Self {
        Self::with_target(module_path!(), level)
    }

    pub fn with_target(target: &str, level: Level) -> Self {
        Self {
            target: target.into(),
            level,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        let line = line.strip_suffix('\n').unwrap_or(&line);
        log::log!(target: self.target.as_str(), self.level, "{}", line);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn log_writer(level: Level) -> LineWriter<LogSink> {
    LineWriter::new(LogSink::new(level))
}
