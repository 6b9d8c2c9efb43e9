use std::num::NonZeroUsize;

use log::Level;
use structopt::StructOpt;

use crate::error::{Error, Result};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lw",
    about = "Copies stdin to stdout, flushing the output after every line"
)]
pub struct CliOpt {
    /// Capacity of the output buffer in bytes. A full buffer is flushed even
    /// without a newline.
    #[structopt(long = "capacity", short = "c", default_value = "8192", parse(try_from_str = parse_size))]
    pub capacity: NonZeroUsize,

    /// Read the input in chunks of this many bytes instead of line by line.
    #[structopt(long = "chunk-size", short = "s", parse(try_from_str = parse_size))]
    pub chunk_size: Option<NonZeroUsize>,

    /// Input delimiter used when reading line by line (\n, \t, \0 or a single ASCII character).
    #[structopt(long = "delimiter", short = "d", default_value = "\\n", parse(try_from_str = parse_delimiter))]
    pub delimiter: u8,

    /// Send every line to the logger at this level instead of stdout.
    #[structopt(long = "log", short = "l")]
    pub log: Option<Level>,

    /// Print write statistics of the output sink to stderr as JSON.
    #[structopt(long = "stats")]
    pub stats: bool,
}

fn parse_size(s: &str) -> Result<NonZeroUsize> {
    s.parse::<NonZeroUsize>()
        .map_err(|e| Error::from(format!("size must be a positive integer, got {:?}: {}", s, e)))
}

fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "\\n" => Ok(b'\n'),
        "\\t" => Ok(b'\t'),
        "\\0" => Ok(0),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single ASCII character, got {:?}", s).into()),
    }
}
