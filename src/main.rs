use anyhow::Result;
use clap::Parser;

use scrubber::cli::{run, CliArgs};

fn main() -> Result<()> {
    let _guard = scrubber::tracing::init();

    let args = CliArgs::parse();
    tracing::debug!(?args, "starting");

    let output = run(args)?;
    println!("{}", output);

    Ok(())
}
