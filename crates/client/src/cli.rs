//! Command-line and environment configuration for the `house` binary.

use std::path::PathBuf;

use clap::Parser;

/// Play in the house from a terminal.
#[derive(Debug, Parser)]
#[command(name = "house")]
#[command(about = "Text adventure house simulation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding rooms.json, mobs.json and an optional config.toml
    #[arg(long, value_name = "DIR", env = "HOUSE_DATA_DIR", default_value = "./data/")]
    pub data_dir: PathBuf,

    /// Also write logs to `<DIR>/house.log`
    #[arg(long, value_name = "DIR", env = "HOUSE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
