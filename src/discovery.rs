//! Locates session transcripts inside a project directory.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, UsageError};

pub const SESSION_FILE_EXT: &str = "jsonl";

/// Same matching as the shell glob `*.jsonl`: dotfiles are skipped.
fn is_session_file(name: &str) -> bool {
    !name.starts_with('.')
        && name
            .strip_suffix(SESSION_FILE_EXT)
            .is_some_and(|stem| stem.ends_with('.'))
}

/// List `*.jsonl` files directly inside `dir`, sorted by path.
///
/// Claude Code names transcripts so that lexicographic order is chronological.
pub fn discover_session_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(UsageError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                // a broken entry only matters if it would have been a session
                let is_candidate = path
                    .file_name()
                    .is_some_and(|n| is_session_file(&n.to_string_lossy()));
                if e.depth() > 0 && !is_candidate {
                    debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
                return Err(UsageError::io(path, e.into()));
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if is_session_file(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "discovered session files");
    Ok(files)
}
