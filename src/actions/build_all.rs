use anyhow::Result;

use super::Action;
use crate::app::context::AppContext;
use crate::core::runner::{self, CommandInvocation};

/// Run the build script for every configuration from the tools directory.
pub struct BuildAllAction;

impl Action for BuildAllAction {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let inv = CommandInvocation::new(
            ctx.project_root.join(&ctx.cfg.tools_dir),
            &ctx.cfg.python,
        )
        .arg(&ctx.cfg.build_script);
        runner::run(&inv, &ctx.timing_log())?;
        Ok(())
    }
}
