use std::fs::File;
use std::io::{self, BufReader};

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use promtext::cliopt::CliOpt;
use promtext::error::Error;
use promtext::runner::Runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(if opt.verbose { "debug" } else { "warn" })),
        )
        .with_writer(io::stderr)
        .init();

    let runner = Runner::new(&opt);
    let stdout = io::stdout();

    match &opt.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| Error::from(("opening snapshot failed", e)))?;
            runner.run(BufReader::new(file), stdout.lock())?;
        }
        None => {
            let stdin = io::stdin();
            runner.run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}
