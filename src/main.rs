//! freqmine: print the frequent itemsets of a transaction file.
//!
//! Itemsets go to stdout, one per line; diagnostics go to stderr.

use std::io::{self, BufWriter};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use freqmine::{cli::Args, write_itemsets, Dataset};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Load fully before mining so a bad file produces no itemset lines.
    let dataset = Dataset::load(&args.dataset)
        .with_context(|| format!("failed to load dataset {}", args.dataset.display()))?;
    info!(
        transactions = dataset.transaction_count(),
        items = dataset.item_count(),
        "dataset ready"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for engine in args.engines() {
        let start = Instant::now();
        let itemsets = engine
            .mine(&dataset, args.min_frequency)
            .with_context(|| format!("{} failed", engine.name()))?;
        info!(
            algorithm = engine.name(),
            itemsets = itemsets.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "done"
        );
        write_itemsets(&mut out, &itemsets).context("failed to write itemsets")?;
    }

    Ok(())
}
