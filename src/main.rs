// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use tribloom::config::{DEFAULT_CAPACITY, DEFAULT_MODULUS, DEFAULT_MULTIPLIER};
use tribloom::{source, BloomFilter, FilterConfig};

mod menu;
mod report;

#[derive(Parser)]
#[command(name = "tribloom", version, about = "Flag strings that may belong to a known set")]
struct Cli {
    /// File with one known entry per line, loaded into the filter on start
    #[arg(long, global = true, value_name = "PATH", default_value = "malicious.csv")]
    known: PathBuf,

    /// Number of bits in the filter
    #[arg(long, global = true, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Multiplier of the polynomial hash
    #[arg(long, global = true, default_value_t = DEFAULT_MULTIPLIER)]
    multiplier: u64,

    /// Modulus applied to every hash
    #[arg(long, global = true, default_value_t = DEFAULT_MODULUS)]
    modulus: u64,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Check one or more strings
    Check {
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Check every line of a file
    Scan {
        file: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive menu (default)
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = FilterConfig::new(cli.capacity, cli.multiplier, cli.modulus)?;
    let filter = load_known(&cli.known, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.cmd.unwrap_or(Cmd::Menu) {
        Cmd::Check { items } => {
            for item in items {
                report::write_single(&mut out, &item, filter.contains(&item))?;
            }
        }
        Cmd::Scan { file, json } => {
            let candidates = source::read_all(&file)
                .with_context(|| format!("cannot scan {}", file.display()))?;
            let report = filter.scan(candidates);

            if json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                report::write_scan(&mut out, &report)?;
            }
        }
        Cmd::Menu => menu::run(&filter, io::stdin().lock(), &mut out)?,
    }
    Ok(())
}

/// Load the known set. A list that cannot be read leaves the filter empty.
fn load_known(path: &Path, config: FilterConfig) -> BloomFilter {
    match BloomFilter::from_path(path, config) {
        Ok(filter) => {
            tracing::info!(
                path = %path.display(),
                entries = filter.len(),
                bits_set = filter.count_ones(),
                "known set loaded"
            );
            filter
        }
        Err(err) => {
            tracing::error!("{err}");
            BloomFilter::with_config(config)
        }
    }
}
