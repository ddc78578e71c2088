use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use xcresult_owners::logging::{self, Verbosity};
use xcresult_owners::{cli, commands};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    args.validate().context("Invalid arguments")?;
    commands::run(&args)
}
