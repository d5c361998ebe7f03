mod gallery;
mod heatmap;
mod predict;
mod score;

use crate::cli::Command;
use anyhow::Context;
use config::Config;
use std::{io::Write, path::Path};
use tracing::info;

/// Execute `command`, writing human-readable output to `out`.
pub fn run<W: Write>(config: &Config, command: &Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Predict(args) => predict::run(config, args, out),
        Command::Score(args) => score::run(config, args, out),
        Command::Gallery(args) => gallery::run(config, args, out),
        Command::Heatmap(args) => heatmap::run(config, args, out),
        Command::Config => {
            write!(out, "{}", config.to_toml()?)?;
            Ok(())
        }
    }
}

/// Render a table with `write` and store it at `path`.
fn export_csv(
    path: &Path,
    write: impl FnOnce(&mut Vec<u8>) -> Result<(), interchange::Error>,
) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    write(&mut buf)?;
    interchange::write_atomic(path, &buf)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = buf.len(), "csv written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_command_prints_toml() {
        let mut out = Vec::new();
        run(&Config::default(), &Command::Config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[model]"));
        assert!(text.contains("decay_rate = 0.999"));
    }
}
