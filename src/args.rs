use std::path::PathBuf;

use clap::Parser;

pub const APP_NAME: &str = "tic-tac-travel";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, version, about = "Two-player tic-tac-toe with time travel")]
pub struct Args {
    /// Directory for the rolling log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info", value_name = "FILTER")]
    pub log_level: String,

    /// Start with the move list sorted newest first
    #[arg(long)]
    pub descending: bool,
}

impl Args {
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(default_log_dir)
    }
}

/// Platform data directory for logs, or `./logs` when there is none.
pub fn default_log_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(mut path) => {
            path.push(APP_NAME);
            path.push("logs");
            path
        }
        None => PathBuf::from("logs"),
    }
}
