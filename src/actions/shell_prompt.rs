use anyhow::Result;

use super::Action;
use crate::app::context::AppContext;
use crate::core::platform;

/// Open an interactive shell prompt at the project folder.
pub struct ShellPromptAction;

impl Action for ShellPromptAction {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        platform::open_terminal(&ctx.project_root)
    }
}
