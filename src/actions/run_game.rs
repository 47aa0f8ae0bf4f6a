use anyhow::Result;

use super::Action;
use crate::app::context::AppContext;
use crate::config::BuildProfile;
use crate::core::runner::{self, CommandInvocation};

/// Launch the built game binary from the data directory.
///
/// The binary path is absolute so the run is independent of the working
/// directory it executes from.
pub struct RunGameAction {
    pub profile: BuildProfile,
}

impl Action for RunGameAction {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let binary = ctx
            .project_root
            .join(ctx.cfg.game_binary_rel(self.profile));
        let inv = CommandInvocation::new(
            ctx.project_root.join(&ctx.cfg.data_dir),
            binary.to_string_lossy(),
        );
        runner::run(&inv, &ctx.timing_log())?;
        Ok(())
    }
}
