//! Locating files by walking up the directory tree.

use std::path::{Path, PathBuf};

/// Searches the current directory and its ancestors for `name`.
///
/// Returns the first existing `<dir>/<name>`, nearest first. `None` if nothing matches or the
/// current directory cannot be read.
pub fn find_up(name: impl AsRef<Path>) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_up_from(&cwd, name)
}

/// Like [`find_up`], starting at `start` instead of the current directory.
pub fn find_up_from(start: &Path, name: impl AsRef<Path>) -> Option<PathBuf> {
    let name = name.as_ref();

    for dir in start.ancestors() {
        let candidate = dir.join(name);
        tracing::debug!(candidate = %candidate.display(), "find_up candidate");

        if is_exist(&candidate) {
            return Some(candidate);
        }
    }

    None
}

/// Whether `path` exists. Symlinks are followed, so a dangling link does not exist.
pub fn is_exist(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Directory holding the nearest `Cargo.toml` above the current directory.
pub fn project_root() -> Option<PathBuf> {
    let manifest = find_up("Cargo.toml")?;
    manifest.parent().map(Path::to_path_buf)
}
