use std::io::{self, BufRead, Write as _};

use anyhow::Result;
use console::style;
use tracing::debug;

use super::registry::{MenuRegistry, Selection};
use crate::app::context::AppContext;

/// Drive the menu read-eval-print loop until the user exits.
///
/// Unknown tokens and failed actions are reported distinctly and the loop
/// keeps running; only the exit token (or end of input) terminates it.
///
/// # Errors
/// Returns an error if stdin or stdout fails.
pub fn run_loop<R: BufRead>(ctx: &AppContext, registry: &MenuRegistry, mut input: R) -> Result<()> {
    let mut line = String::new();
    loop {
        print!("{}", registry.render());
        print!("Select an option: ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like an explicit exit.
            return Ok(());
        }
        let token = line.trim();

        match registry.resolve(token) {
            Selection::Exit => return Ok(()),
            Selection::Entry(index) => {
                debug!(index, "dispatching menu entry");
                if let Err(e) = registry.run(index, ctx) {
                    println!("{} {e:#}", style("Command failed:").red());
                }
            }
            Selection::Unknown => {
                println!("{} {token}", style("Unhandled command").yellow());
            }
        }
    }
}
