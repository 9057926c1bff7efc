// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stockwatch CLI
//!
//! Loads a JSON array of records, runs one dashboard query against it and
//! prints the result as JSON on stdout. Logs go to stderr.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use stockwatch_app_core::{
    ConfigError, ConfigService, DashboardPrefs, DashboardQuery, MetricRange,
};
use stockwatch_config_fs::FsConfigStore;
use stockwatch_core::{distinct_names, summarize, Record, Status, TextFilter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Classify, filter and summarize dashboard records")]
struct Args {
    /// JSON file holding an array of records
    #[arg(long)]
    records: Option<PathBuf>,

    /// Directory holding saved prefs (defaults to the platform config dir)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print status value counts for every record
    Summary,
    /// Print distinct record names in first-seen order
    Names,
    /// Run a dashboard query seeded from saved prefs
    Query {
        /// Name filter ("All" disables it)
        #[arg(long)]
        name: Option<String>,
        /// Category filter ("All" disables it)
        #[arg(long)]
        category: Option<String>,
        /// Status filter (low-stock, sufficient, occupied, available)
        #[arg(long)]
        status: Option<Status>,
        /// Slider value for the "at or below" quantity table, clamped to the
        /// saved slider bounds
        #[arg(long)]
        max_quantity: Option<u32>,
        /// Metric range as NAME=LOW..HIGH (e.g. age=65..120)
        #[arg(long, value_parser = parse_metric_range)]
        metric: Option<MetricRange>,
    },
    /// Print the effective prefs, optionally saving them
    Prefs {
        /// Write the effective prefs back to the config dir
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = open_config(args.config_dir.as_deref());
    let saved = match &config {
        Ok(service) => service.load_prefs().map_err(anyhow::Error::from),
        Err(err) => Err(anyhow!("config dir unavailable: {err}")),
    };
    let prefs = match &saved {
        Ok(prefs) => prefs.clone(),
        Err(err) => {
            warn!(%err, "using default dashboard prefs");
            DashboardPrefs::default()
        }
    };

    match args.cmd {
        Command::Summary => {
            let records = load_records(required(args.records.as_deref())?)?;
            emit(&summarize(&records)?)
        }
        Command::Names => {
            let records = load_records(required(args.records.as_deref())?)?;
            emit(&distinct_names(&records))
        }
        Command::Query {
            name,
            category,
            status,
            max_quantity,
            metric,
        } => {
            let records = load_records(required(args.records.as_deref())?)?;
            let mut query = DashboardQuery::from_prefs(&prefs);
            if let Some(name) = name {
                query.name = TextFilter::from(name);
            }
            if let Some(category) = category {
                query.category = TextFilter::from(category);
            }
            if status.is_some() {
                query.status = status;
            }
            if let Some(value) = max_quantity {
                query = query.with_slider(&prefs.quantity_slider, value);
            }
            query.metric_range = metric;
            emit(&query.run(&records)?)
        }
        Command::Prefs { save } => {
            if save {
                let service = config.context("open config dir")?;
                saved.context("refusing to overwrite unreadable saved prefs")?;
                service.save_prefs(&prefs).context("save prefs")?;
                info!("dashboard prefs saved");
            }
            emit(&prefs)
        }
    }
}

fn open_config(dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>, ConfigError> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir)?,
        None => FsConfigStore::new()?,
    };
    Ok(ConfigService::new(store))
}

fn required(path: Option<&Path>) -> Result<&Path> {
    path.ok_or_else(|| anyhow!("--records <FILE> is required for this command"))
}

fn load_records(path: &Path) -> Result<Vec<Record>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse records from {}", path.display()))?;
    info!(count = records.len(), path = %path.display(), "records loaded");
    Ok(records)
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn parse_metric_range(s: &str) -> Result<MetricRange, String> {
    let (metric, bounds) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=LOW..HIGH, got `{s}`"))?;
    let (low, high) = bounds
        .split_once("..")
        .ok_or_else(|| format!("expected LOW..HIGH, got `{bounds}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad bound `{v}`: {e}"))
    };
    Ok(MetricRange {
        metric: metric.trim().to_owned(),
        low: parse(low)?,
        high: parse(high)?,
    })
}
