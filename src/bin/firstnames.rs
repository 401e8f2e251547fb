// src/bin/firstnames.rs
use anyhow::Result;
use clap::Parser;

use freqlists::{FirstnamesArgs, logging, run_firstnames};

fn main() -> Result<()> {
    let args = FirstnamesArgs::parse();
    logging::init(&args.common.log_options())?;
    run_firstnames(args)
}
