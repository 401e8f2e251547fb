// src/bin/passwords.rs
use anyhow::Result;
use clap::Parser;

use freqlists::{PasswordsArgs, logging, run_passwords};

fn main() -> Result<()> {
    let args = PasswordsArgs::parse();
    logging::init(&args.common.log_options())?;
    run_passwords(args)
}
