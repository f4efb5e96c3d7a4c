use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use interlock_gate::ValidationStrategy;

#[derive(Parser)]
#[command(
    name = "interlock",
    about = "Interlock: capability-checked access to a single-value Store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the Store interface selectors and its capability id
    Selectors,
    /// Canonicalise signatures and compute their selectors and combined id
    Selector(SelectorArgs),
    /// Run the reference scenario against an in-process host
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct SelectorArgs {
    /// Signatures such as "setValue(int)"
    #[arg(required = true)]
    pub signatures: Vec<String>,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Conformance check: probe or behavioral (overrides --config)
    #[arg(long)]
    pub strategy: Option<ValidationStrategy>,
    /// Value written to the conforming store
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub value: i64,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
