use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

/// Fire-and-forget OS-level "open" request for a file or folder.
///
/// The handler window outlives the launcher; nothing is waited on, timed, or
/// logged.
///
/// # Errors
/// Returns an error if the open handler cannot be spawned.
pub fn open_detached(target: &Path) -> Result<()> {
    debug!(target = %target.display(), "opening via OS handler");
    let mut cmd = os_open_command(target);
    detach(&mut cmd);
    cmd.spawn()
        .with_context(|| format!("failed to open {}", target.display()))?;
    Ok(())
}

/// Spawn a program detached from the launcher, from a working directory.
///
/// # Errors
/// Returns an error if the program cannot be spawned.
pub fn spawn_detached(program: &str, working_dir: &Path) -> Result<()> {
    debug!(program, dir = %working_dir.display(), "spawning detached");
    let mut cmd = Command::new(program);
    cmd.current_dir(working_dir);
    detach(&mut cmd);
    cmd.spawn()
        .with_context(|| format!("failed to start `{program}`"))?;
    Ok(())
}

/// Open an interactive shell prompt at the given directory.
///
/// # Errors
/// Returns an error if the terminal program cannot be spawned.
pub fn open_terminal(working_dir: &Path) -> Result<()> {
    debug!(dir = %working_dir.display(), "opening shell prompt");
    let mut cmd = terminal_command(working_dir);
    detach(&mut cmd);
    cmd.spawn().context("failed to open a shell prompt")?;
    Ok(())
}

fn detach(cmd: &mut Command) {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
}

#[cfg(target_os = "windows")]
fn os_open_command(target: &Path) -> Command {
    // `start` needs an explicit (empty) window title before the target.
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(target);
    cmd
}

#[cfg(target_os = "macos")]
fn os_open_command(target: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn os_open_command(target: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}

#[cfg(target_os = "windows")]
fn terminal_command(working_dir: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "cmd"]).current_dir(working_dir);
    cmd
}

#[cfg(target_os = "macos")]
fn terminal_command(working_dir: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.args(["-a", "Terminal"]).arg(working_dir);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn terminal_command(working_dir: &Path) -> Command {
    let terminal =
        std::env::var("TERMINAL").unwrap_or_else(|_| "x-terminal-emulator".to_string());
    let mut cmd = Command::new(terminal);
    cmd.current_dir(working_dir);
    cmd
}
