// src/main.rs
use anyhow::Result;
use clap::Parser;

use forcecount::{Args, logging, run};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(args.verbose, args.quiet)?;
    let config = args.into_config()?;
    run(&config)
}
