//! A line-buffered writer.
//!
//! [`output::LineWriter`] wraps any [`std::io::Write`] sink, buffers what is
//! written to it and flushes the sink whenever a newline goes through, or
//! when the buffer fills up. The rest of the crate backs the `lw` command
//! line tool.

pub mod cliopt;
pub mod error;
pub mod input;
pub mod output;
pub mod runner;
