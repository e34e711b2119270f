//! CLI argument parsing for flowgen

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fg")]
#[command(
    author,
    version,
    about = "Generate flow pipeline code from the go_flow/structure templates",
    long_about = None
)]
pub struct Cli {
    /// Name of the _Data struct which stores all the data you need
    #[arg(long, value_name = "NAME")]
    pub data: Option<String>,

    /// Name of the _Result struct which stores all the output
    #[arg(long, value_name = "NAME")]
    pub result: Option<String>,

    /// Name of the _PrepareInput struct passed to the prepare function
    #[arg(long, value_name = "NAME")]
    pub prepare: Option<String>,

    /// Directory holding the template files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub source: PathBuf,

    /// Directory to put the generated files in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Package name for the generated source files
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}
