use anyhow::Result;

use crate::app::context::AppContext;

pub mod build_all;
pub mod git_gui;
pub mod open_solution;
pub mod project_folder;
pub mod pull_build_launch;
pub mod run_game;
pub mod shell_prompt;

/// Unified interface implemented by each menu action.
pub trait Action {
    /// Execute the action.
    ///
    /// # Errors
    /// Returns an error if the action fails; the menu loop reports the
    /// failure and keeps running.
    fn run(&self, ctx: &AppContext) -> Result<()>;
}
