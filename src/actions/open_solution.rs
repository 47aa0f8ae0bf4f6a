use anyhow::Result;

use super::Action;
use crate::app::context::AppContext;
use crate::core::platform;

/// Open the IDE solution via the OS file handler.
pub struct OpenSolutionAction;

impl Action for OpenSolutionAction {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        platform::open_detached(&ctx.project_root.join(&ctx.cfg.solution))
    }
}
