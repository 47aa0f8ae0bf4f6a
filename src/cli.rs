use clap::{ArgAction, Parser};

/// grid-launcher command-line interface.
///
/// The launcher itself is driven interactively over stdin; the only flags are
/// ambient ones (verbosity, version, help).
#[derive(Parser, Debug, Clone)]
#[command(name = "grid-launcher", version, about = "Interactive menu for the GridGame development workflow", long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
