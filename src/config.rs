use std::env;
use std::path::PathBuf;

/// Build configuration of the game binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    /// Directory name used by the build output layout (`Build/x64/<name>`).
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

/// Launcher configuration values.
///
/// Constructed once at startup and never mutated; compiled defaults with
/// `GRID_LAUNCHER_*` environment overrides for the interpreter and timing log.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Python interpreter used for the build scripts.
    pub python: String,
    /// File name of the append-only timing log, relative to the project root.
    pub timing_log: PathBuf,
    /// IDE solution file, relative to the project root.
    pub solution: PathBuf,
    /// Directory the game runs from.
    pub data_dir: PathBuf,
    /// Directory holding the build scripts.
    pub tools_dir: PathBuf,
    /// Build output root, also the parent of the scratch checkout.
    pub build_dir: PathBuf,
    /// Folder name of the scratch checkout under `build_dir`.
    pub checkout_folder: String,
    /// Build script name, invoked from a tools directory.
    pub build_script: String,
    /// Bootstrap script, relative to the project root.
    pub bootstrap_script: PathBuf,
    /// Base name of the game binary (platform suffix appended separately).
    pub game_binary: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        let python = if cfg!(windows) { "python" } else { "python3" };
        Self {
            python: python.to_string(),
            timing_log: PathBuf::from("Bootstrap.log"),
            solution: PathBuf::from("Src").join("GridGame.sln"),
            data_dir: PathBuf::from("Data"),
            tools_dir: PathBuf::from("Tools"),
            build_dir: PathBuf::from("Build"),
            checkout_folder: "GridGame".to_string(),
            build_script: "BuildGridGame.py".to_string(),
            bootstrap_script: PathBuf::from("Tools").join("Bootstrap.py"),
            game_binary: "Builder".to_string(),
        }
    }
}

impl LauncherConfig {
    /// Build the configuration from defaults plus environment overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut out = Self::default();
        if let Ok(v) = env::var("GRID_LAUNCHER_PYTHON")
            && !v.is_empty()
        {
            out.python = v;
        }
        if let Ok(v) = env::var("GRID_LAUNCHER_LOG")
            && !v.is_empty()
        {
            out.timing_log = PathBuf::from(v);
        }
        out
    }

    /// Game binary path for a build profile, relative to a checkout root.
    #[must_use]
    pub fn game_binary_rel(&self, profile: BuildProfile) -> PathBuf {
        let file = format!("{}{}", self.game_binary, env::consts::EXE_SUFFIX);
        self.build_dir
            .join("x64")
            .join(profile.dir_name())
            .join(file)
    }
}
