pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod menu;

use std::io;

use anyhow::Result;

use crate::app::context::AppContext;
use crate::menu::registry::MenuRegistry;

/// Entry point for the interactive launcher.
///
/// # Errors
/// Returns an error if the project root cannot be determined or stdin fails.
pub fn run(cli: &cli::Cli) -> Result<()> {
    let ctx = AppContext::from_cwd(cli.verbose)?;
    let registry = MenuRegistry::standard(&ctx.cfg);

    let stdin = io::stdin();
    menu::repl::run_loop(&ctx, &registry, stdin.lock())
}
