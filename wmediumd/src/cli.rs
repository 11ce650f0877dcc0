use std::path::PathBuf;

use clap::Parser;

/// Wireless medium simulator for mac80211_hwsim test topologies.
#[derive(Debug, Parser)]
#[command(name = "wmediumd", version, about)]
pub struct Cli {
    /// Load a topology from FILE and run the daemon.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Interactively write a zero-filled sample topology to FILE and exit.
    #[arg(short = 'o', long = "write-sample", value_name = "FILE")]
    pub write_sample: Option<PathBuf>,
}
