//! sentinel - watch a CI server's jobs and report lifecycle changes.

mod driver;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sentinel",
    version,
    about = "Get CI server status and generate events. \
             Default behavior is to print changes in status since last run."
)]
struct Cli {
    /// CI server URL (example: "https://ci.cfengine.com/")
    url: Option<String>,

    /// Read a previously serialized snapshot instead of polling the network
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    offline: Option<PathBuf>,

    /// Directory used for saving the server identity and job snapshot
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// Run in a loop forever
    #[arg(short = 'l', long = "loop")]
    keep_polling: bool,

    /// Seconds between polls when looping
    #[arg(long, default_value_t = 5)]
    interval: u64,

    /// Print running jobs after the first poll
    #[arg(short, long)]
    running: bool,

    /// More detailed output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(logging::LogDestination::Terminal, cli.verbose);
    driver::run(cli)
}
