use anyhow::Result;

use super::Action;
use crate::app::context::AppContext;
use crate::core::platform;

/// Open the git GUI on the project repository.
pub struct GitGuiAction;

impl Action for GitGuiAction {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        platform::spawn_detached("git-gui", &ctx.project_root)
    }
}
