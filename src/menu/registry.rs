use std::fmt::Write as _;

use anyhow::Result;

use crate::actions::{
    Action, build_all::BuildAllAction, git_gui::GitGuiAction, open_solution::OpenSolutionAction,
    project_folder::OpenProjectFolderAction, pull_build_launch::PullBuildLaunchAction,
    run_game::RunGameAction, shell_prompt::ShellPromptAction,
};
use crate::app::context::AppContext;
use crate::config::{BuildProfile, LauncherConfig};

/// Text column between the two border bars.
const INNER_WIDTH: usize = 74;

/// One menu entry: a display label and the action behind it. The entry's
/// index is its position in the registry.
pub struct MenuEntry {
    label: String,
    action: Box<dyn Action>,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, action: Box<dyn Action>) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Outcome of classifying one line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A valid zero-based entry index.
    Entry(usize),
    /// The exit token, `x` in any case.
    Exit,
    /// Anything else: empty, non-numeric, or out of range.
    Unknown,
}

/// Ordered, index-addressable menu.
///
/// The same entry list drives both rendering and input resolution, so the
/// displayed menu and the accepted input set cannot drift apart. Built once
/// at startup and never mutated.
pub struct MenuRegistry {
    entries: Vec<MenuEntry>,
}

impl MenuRegistry {
    #[must_use]
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// The standard launcher menu, in display order.
    #[must_use]
    pub fn standard(cfg: &LauncherConfig) -> Self {
        Self::new(vec![
            MenuEntry::new("Open Solution", Box::new(OpenSolutionAction)),
            MenuEntry::new("Open Git Gui", Box::new(GitGuiAction)),
            MenuEntry::new("Open Project Folder", Box::new(OpenProjectFolderAction)),
            MenuEntry::new(
                "Shell Prompt from Project Folder",
                Box::new(ShellPromptAction),
            ),
            MenuEntry::new(
                "Launch Game: Debug x64",
                Box::new(RunGameAction {
                    profile: BuildProfile::Debug,
                }),
            ),
            MenuEntry::new(
                "Launch Game: Release x64",
                Box::new(RunGameAction {
                    profile: BuildProfile::Release,
                }),
            ),
            MenuEntry::new("Build all Configurations", Box::new(BuildAllAction)),
            MenuEntry::new(
                format!(
                    "Pull, build, and launch from {}/{}",
                    cfg.build_dir.display(),
                    cfg.checkout_folder
                ),
                Box::new(PullBuildLaunchAction),
            ),
        ])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classify one raw input token against the registry.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Selection {
        let token = token.trim();
        if token.eq_ignore_ascii_case("x") {
            return Selection::Exit;
        }
        match token.parse::<usize>() {
            Ok(index) if index < self.entries.len() => Selection::Entry(index),
            _ => Selection::Unknown,
        }
    }

    /// Run the action registered at `index`.
    ///
    /// # Errors
    /// Returns the action's error; the caller decides how to report it.
    ///
    /// # Panics
    /// Panics if `index` is out of range; use [`Self::resolve`] first.
    pub fn run(&self, index: usize, ctx: &AppContext) -> Result<()> {
        self.entries[index].action.run(ctx)
    }

    /// Render the bordered menu block.
    #[must_use]
    pub fn render(&self) -> String {
        let heavy = format!("+{}+\n", "=".repeat(INNER_WIDTH));
        let light = format!("+{}+\n", "-".repeat(INNER_WIDTH));

        let mut out = String::from("\n");
        out.push_str(&heavy);
        push_row(&mut out, " Welcome to the GridGame launcher");
        out.push_str(&light);
        push_row(&mut out, "  Options");
        for (index, entry) in self.entries.iter().enumerate() {
            push_row(&mut out, &format!("  ({index}) {}", entry.label()));
        }
        push_row(&mut out, "  (X) Exit launcher");
        out.push_str(&light);
        out
    }
}

fn push_row(out: &mut String, text: &str) {
    let _ = writeln!(out, "|{text:<INNER_WIDTH$}|");
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use anyhow::bail;

    use super::*;

    struct RecordingAction {
        id: usize,
        hits: Rc<RefCell<Vec<usize>>>,
    }

    impl Action for RecordingAction {
        fn run(&self, _ctx: &AppContext) -> Result<()> {
            self.hits.borrow_mut().push(self.id);
            Ok(())
        }
    }

    struct FailingAction;

    impl Action for FailingAction {
        fn run(&self, _ctx: &AppContext) -> Result<()> {
            bail!("boom")
        }
    }

    fn test_ctx() -> AppContext {
        AppContext::new(PathBuf::from("."), LauncherConfig::default(), 0)
    }

    fn recording_registry(hits: &Rc<RefCell<Vec<usize>>>) -> MenuRegistry {
        let entries = (0..3)
            .map(|id| {
                MenuEntry::new(
                    format!("entry {id}"),
                    Box::new(RecordingAction {
                        id,
                        hits: Rc::clone(hits),
                    }) as Box<dyn Action>,
                )
            })
            .collect();
        MenuRegistry::new(entries)
    }

    #[test]
    fn resolve_accepts_in_range_indices() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(&hits);
        assert_eq!(registry.resolve("0"), Selection::Entry(0));
        assert_eq!(registry.resolve(" 2 "), Selection::Entry(2));
    }

    #[test]
    fn resolve_exit_is_case_insensitive() {
        let registry = MenuRegistry::standard(&LauncherConfig::default());
        assert_eq!(registry.resolve("x"), Selection::Exit);
        assert_eq!(registry.resolve("X"), Selection::Exit);
        assert_eq!(registry.resolve("  X  "), Selection::Exit);
    }

    #[test]
    fn resolve_rejects_everything_else() {
        let registry = MenuRegistry::standard(&LauncherConfig::default());
        for token in ["", "99", "-1", "abc", "1.5", "exit", "0x1"] {
            assert_eq!(registry.resolve(token), Selection::Unknown, "token {token:?}");
        }
    }

    #[test]
    fn run_invokes_exactly_the_selected_entry() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(&hits);
        let ctx = test_ctx();

        registry.run(1, &ctx).expect("entry 1");
        registry.run(0, &ctx).expect("entry 0");

        assert_eq!(*hits.borrow(), vec![1, 0]);
    }

    #[test]
    fn action_errors_surface_to_the_caller() {
        let registry = MenuRegistry::new(vec![MenuEntry::new("bad", Box::new(FailingAction))]);
        let err = registry.run(0, &test_ctx()).expect_err("must fail");
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn standard_menu_has_eight_entries() {
        let registry = MenuRegistry::standard(&LauncherConfig::default());
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn render_is_a_fixed_width_block() {
        let registry = MenuRegistry::standard(&LauncherConfig::default());
        let rendered = registry.render();

        for line in rendered.lines().filter(|l| !l.is_empty()) {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2, "line {line:?}");
        }
        assert!(rendered.contains("(0) Open Solution"));
        assert!(rendered.contains("(7) Pull, build, and launch from Build/GridGame"));
        assert!(rendered.contains("(X) Exit launcher"));
    }
}
