use anyhow::Result;

use super::Action;
use crate::app::context::AppContext;
use crate::core::platform;

/// Open the project folder in the OS file browser.
pub struct OpenProjectFolderAction;

impl Action for OpenProjectFolderAction {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        platform::open_detached(&ctx.project_root)
    }
}
