use std::io;

use env_logger::Env;
use log::debug;
use structopt::StructOpt;

use linewriter::cliopt::CliOpt;
use linewriter::output::{Counted, LineWriter, LogSink};
use linewriter::runner::{chunk_reader, Runner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    let default_filter = match opt.log {
        Some(level) => level.as_str().to_lowercase(),
        None => "warn".to_string(),
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let reader = chunk_reader(&opt, io::stdin().lock());

    let stats = match opt.log {
        Some(level) => {
            let sink = Counted::new(LogSink::with_target("lw", level));
            let sink = Runner::new(reader, LineWriter::with_capacity(opt.capacity.get(), sink)).run()?;
            sink.stats()
        }
        None => {
            let sink = Counted::new(io::stdout());
            let sink = Runner::new(reader, LineWriter::with_capacity(opt.capacity.get(), sink)).run()?;
            sink.stats()
        }
    };

    debug!("{} bytes written in {} writes", stats.bytes, stats.writes);
    if opt.stats {
        eprintln!("{}", serde_json::to_string(&stats)?);
    }

    Ok(())
}
