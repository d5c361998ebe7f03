use anyhow::Context;
use battery_risk::{cli::Cli, commands};
use clap::Parser;
use config::Config;
use std::io::{self, Write};
use tracing::debug;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let config = match &cli.conffile {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        _ => Config::from_env().context("reading environment overrides")?,
    };

    let mut stdout = io::stdout().lock();
    commands::run(&config, &cli.command, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
