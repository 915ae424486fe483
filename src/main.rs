use anyhow::Result;
use clap::Parser;

use tic_tac_travel::{args::Args, logging, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init(&args.log_dir(), &args.log_level)?;

    tracing::info!(log_dir = %args.log_dir().display(), "Starting");
    run_ui(&args)
}
