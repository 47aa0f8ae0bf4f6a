use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use tracing::warn;

use super::timing::TimingStart;

/// One synchronous external command, run from a specific working directory.
///
/// Constructed fresh per call; never persisted.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub working_dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
    /// Append a timing record to the launcher log after the run.
    pub log_timing: bool,
}

impl CommandInvocation {
    pub fn new(working_dir: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            program: program.into(),
            args: Vec::new(),
            log_timing: false,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub const fn logged(mut self) -> Self {
        self.log_timing = true;
        self
    }

    fn render(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Guard that restores the launcher working directory on drop.
///
/// The working directory is the only shared mutable resource in the process;
/// restoration must happen on every path out of a run, including panics and
/// spawn failures.
struct WorkDirGuard {
    original: PathBuf,
}

impl WorkDirGuard {
    fn enter(dir: &Path) -> Result<Self> {
        let original = env::current_dir().context("failed to read current directory")?;
        env::set_current_dir(dir)
            .with_context(|| format!("failed to enter {}", dir.display()))?;
        Ok(Self { original })
    }
}

impl Drop for WorkDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.original) {
            warn!(
                dir = %self.original.display(),
                error = %e,
                "failed to restore working directory"
            );
        }
    }
}

/// Run one external command synchronously from its working directory.
///
/// Blocks until the child exits. The start timestamp and elapsed duration are
/// printed to stdout whether or not timing is logged; with `log_timing` set,
/// one CSV record is appended to `timing_log` (best-effort). A non-zero child
/// exit is reported as a warning but returned as a plain status, not an error.
///
/// # Errors
/// Returns an error if the working directory cannot be entered or the child
/// cannot be spawned; in both cases the original directory is restored first.
pub fn run(inv: &CommandInvocation, timing_log: &Path) -> Result<ExitStatus> {
    let timer = TimingStart::begin();
    println!(
        "{} - running `{}` in {}",
        timer.timestamp(),
        inv.render(),
        inv.working_dir.display()
    );

    let spawned = {
        let _guard = WorkDirGuard::enter(&inv.working_dir)?;
        Command::new(&inv.program)
            .args(&inv.args)
            .status()
            .with_context(|| format!("failed to run `{}`", inv.render()))
    };

    let record = timer.finish();
    println!("operation took {:.3}s", record.duration_secs());
    if inv.log_timing {
        record.append_to(timing_log);
    }

    let status = spawned?;
    if !status.success() {
        warn!(program = %inv.program, %status, "command exited with non-zero status");
    }
    Ok(status)
}
