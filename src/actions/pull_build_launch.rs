use std::fs;

use anyhow::{Context, Result};

use super::Action;
use crate::app::context::AppContext;
use crate::config::BuildProfile;
use crate::core::runner::{self, CommandInvocation};

/// Pull a scratch checkout under `Build/`, build it, and launch the result.
///
/// The only action that mutates the filesystem itself: it creates `Build/`
/// if absent before chaining three synchronous runner invocations, each from
/// its own working directory. All three append timing records to the log.
pub struct PullBuildLaunchAction;

impl Action for PullBuildLaunchAction {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let cfg = &ctx.cfg;
        let build_dir = ctx.project_root.join(&cfg.build_dir);
        if !build_dir.is_dir() {
            fs::create_dir(&build_dir)
                .with_context(|| format!("failed to create {}", build_dir.display()))?;
        }

        let checkout = build_dir.join(&cfg.checkout_folder);
        let bootstrap = ctx.project_root.join(&cfg.bootstrap_script);
        let game = checkout.join(cfg.game_binary_rel(BuildProfile::Release));

        let steps = [
            // Bootstrap pulls (clones or updates) the checkout under Build/.
            CommandInvocation::new(&build_dir, &cfg.python)
                .arg(bootstrap.to_string_lossy())
                .logged(),
            CommandInvocation::new(checkout.join(&cfg.tools_dir), &cfg.python)
                .arg(&cfg.build_script)
                .logged(),
            CommandInvocation::new(checkout.join(&cfg.data_dir), game.to_string_lossy())
                .logged(),
        ];

        for step in &steps {
            runner::run(step, &ctx.timing_log())?;
        }
        Ok(())
    }
}
