use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Routes `log` output to `log_file`, filtered by `RUST_LOG` (default
/// `info`). Stderr sits under the alternate screen, so without a file
/// logging stays off whatever `RUST_LOG` says.
pub fn init(log_file: &str) -> Result<()> {
    builder(log_file)?.try_init().context("logger already initialised")?;
    Ok(())
}

fn builder(log_file: &str) -> Result<Builder> {
    let path = log_file.trim();
    if path.is_empty() {
        let mut builder = Builder::new();
        builder.filter_level(LevelFilter::Off);
        return Ok(builder);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {path}"))?;
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Pipe(Box::new(file)));
    Ok(builder)
}
