use clap::Parser;
use std::path::PathBuf;

/// Sweep All - run `cargo clean` in every directory under a root
#[derive(Parser, Debug)]
#[command(name = "sweep-all")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory whose children will be cleaned
    #[arg(value_name = "ROOT")]
    pub path: PathBuf,

    /// Parallel clean jobs (0 = number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors (overrides -v)
    #[arg(short, long)]
    pub quiet: bool,
}
