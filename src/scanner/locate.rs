use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names tried, in order, when looking for the Java runtime.
pub const JAVA_CANDIDATES: &[&str] = &["java", "java.exe"];

/// Legacy relative resources directory, used when nothing else resolves.
pub const FALLBACK_RESOURCES_DIR: &str = "resources";

/// Search-path lookup for an executable by name.
pub trait PathLookup: Send + Sync {
    fn find(&self, name: &str) -> Option<PathBuf>;
}

/// Looks executables up on the process `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPath;

impl PathLookup for SystemPath {
    fn find(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

impl<F> PathLookup for F
where
    F: Fn(&str) -> Option<PathBuf> + Send + Sync,
{
    fn find(&self, name: &str) -> Option<PathBuf> {
        self(name)
    }
}

/// Resolve the Java runtime, trying each of [`JAVA_CANDIDATES`].
pub fn find_runtime(lookup: &dyn PathLookup) -> Result<PathBuf> {
    JAVA_CANDIDATES
        .iter()
        .find_map(|name| lookup.find(name))
        .ok_or_else(|| ScanError::RuntimeNotFound(JAVA_CANDIDATES[0].to_string()))
}

/// Resolves the directory holding a subcommand's bundled scanner.
pub trait ResourceLocator: Send + Sync {
    fn resources_dir(&self, subcommand: &str) -> Result<PathBuf>;
}

/// Resolution order: explicit directory, then the JFrog CLI plugin layout
/// (`<plugins root>/<subcommand>/resources`), then `./resources`.
#[derive(Debug, Clone, Default)]
pub struct ResourceDirs {
    explicit: Option<PathBuf>,
    plugins_root: Option<PathBuf>,
}

impl ResourceDirs {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            plugins_root: jfrog_plugins_root(),
        }
    }

    pub fn with_plugins_root(mut self, root: Option<PathBuf>) -> Self {
        self.plugins_root = root;
        self
    }

    fn candidates(&self, subcommand: &str) -> Vec<PathBuf> {
        if let Some(dir) = &self.explicit {
            return vec![dir.clone()];
        }
        let mut dirs = Vec::new();
        if let Some(root) = &self.plugins_root {
            dirs.push(root.join(subcommand).join("resources"));
        }
        dirs.push(PathBuf::from(FALLBACK_RESOURCES_DIR));
        dirs
    }
}

impl ResourceLocator for ResourceDirs {
    fn resources_dir(&self, subcommand: &str) -> Result<PathBuf> {
        let candidates = self.candidates(subcommand);
        match candidates.iter().find(|dir| dir.is_dir()) {
            Some(dir) => {
                debug!("Resources for {}: {}", subcommand, dir.display());
                Ok(dir.clone())
            }
            None => Err(ScanError::ResourcesNotFound(candidates)),
        }
    }
}

/// A fixed directory for every subcommand.
impl ResourceLocator for PathBuf {
    fn resources_dir(&self, _subcommand: &str) -> Result<PathBuf> {
        Ok(self.clone())
    }
}

/// `$JFROG_CLI_HOME_DIR/plugins`, or `~/.jfrog/plugins` when unset.
#[must_use]
pub fn jfrog_plugins_root() -> Option<PathBuf> {
    let home = match std::env::var_os("JFROG_CLI_HOME_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()?.join(".jfrog"),
    };
    Some(home.join("plugins"))
}

/// Full path of a bundled artifact inside a resources directory.
#[must_use]
pub fn artifact_path(resources: &Path, file_name: &str) -> PathBuf {
    resources.join(file_name)
}
