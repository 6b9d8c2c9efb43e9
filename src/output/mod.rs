mod counter;
mod log_sink;
mod writer;

pub use counter::{Counted, Stats};
pub use log_sink::{log_writer, LogSink};
pub use writer::{LineWriter, ShortWrite};
