//! Poll loop: fetch a snapshot, hand it to the watcher, repeat.

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use sentinel_core::ServerIdentity;
use sentinel_engine::{
    ConsoleSink, FileJobSource, HttpJobSource, HttpSettings, JobSource, SnapshotStore, Watcher,
};
use watch_logging::{set_poll_cycle, watch_debug, watch_warn};

use crate::Cli;

pub(crate) fn run(cli: Cli) -> Result<()> {
    let (identity, source): (ServerIdentity, Box<dyn JobSource>) = match (&cli.url, &cli.offline) {
        (Some(url), None) => {
            let identity = ServerIdentity::from_url(url)?;
            let source = HttpJobSource::new(identity.clone(), HttpSettings::default());
            (identity, Box::new(source))
        }
        (None, Some(path)) => {
            let display = path.display().to_string();
            let source = FileJobSource::new(path.clone());
            (ServerIdentity::from_path(&display), Box::new(source))
        }
        _ => bail!("either a server url or --offline FILE is required (use --help for more info)"),
    };

    let store = SnapshotStore::new(&cli.directory);
    let mut watcher = Watcher::open(identity, store, ConsoleSink);
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;

    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        set_poll_cycle(cycle);

        match runtime.block_on(source.fetch()) {
            Ok(snapshot) => {
                let report = watcher.reconcile(snapshot);
                watch_debug!(
                    "Cycle {}: {} changes, persisted: {}",
                    cycle,
                    report.changes.len(),
                    report.persist_error.is_none()
                );
            }
            Err(err) if cli.keep_polling => {
                // No new snapshot this cycle; keep the current one and retry.
                watch_warn!("Fetch failed on cycle {}: {}", cycle, err);
            }
            Err(err) => return Err(err).context("fetching job snapshot"),
        }

        if cycle == 1 && cli.running {
            print_running_jobs(&watcher);
        }
        if !cli.keep_polling {
            break;
        }
        thread::sleep(Duration::from_secs(cli.interval));
    }

    Ok(())
}

fn print_running_jobs(watcher: &Watcher<ConsoleSink>) {
    println!("Running jobs:\n  {}", watcher.running_job_names().join("\n  "));
}
