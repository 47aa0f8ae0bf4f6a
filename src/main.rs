use anyhow::Result;
use clap::Parser;
use grid_launcher::cli::Cli;
use grid_launcher::logging::init::init_tracing;
use grid_launcher::run;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    run(&cli)
}
