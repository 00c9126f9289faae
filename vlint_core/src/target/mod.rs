//! Compile target resolution.
//!
//! The compiler is pointed at a single file only when that file is the
//! sole V source in its directory; otherwise the whole directory is
//! compiled so diagnostics cover the full compile unit.

use std::path::{Path, PathBuf};
use std::{fmt, io};

/// File extension of V source files.
pub const SOURCE_EXTENSION: &str = "v";

/// Errors from resolving a compile target.
#[derive(Debug)]
pub enum TargetError {
    /// The document's directory could not be read.
    Io(PathBuf, io::Error),
    /// The document path has no parent directory.
    NoParentDirectory(PathBuf),
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::Io(path, error) => {
                write!(f, "Could not read directory {}: {}", path.display(), error)
            }
            TargetError::NoParentDirectory(path) => {
                write!(f, "Document {} has no parent directory", path.display())
            }
        }
    }
}

/// Resolves the path or directory to pass as the compile target.
///
/// Given the linted document's absolute path and the workspace root:
/// the document's workspace-relative path if it is the only `.v` file in
/// its directory, the enclosing relative directory otherwise, or `"."`
/// when that directory is the workspace root itself.
pub fn resolve_compile_target(
    document: &Path,
    workspace_root: &Path,
) -> Result<PathBuf, TargetError> {
    let directory = document
        .parent()
        .ok_or_else(|| TargetError::NoParentDirectory(document.to_path_buf()))?;

    let source_count = count_source_files(directory)?;

    if source_count == 1 {
        return Ok(relative_to(document, workspace_root));
    }
    if directory == workspace_root {
        return Ok(PathBuf::from("."));
    }
    Ok(relative_to(directory, workspace_root))
}

/// Counts V source files directly inside `directory`.
fn count_source_files(directory: &Path) -> Result<usize, TargetError> {
    let entries = std::fs::read_dir(directory)
        .map_err(|e| TargetError::Io(directory.to_path_buf(), e))?;

    let count = entries
        .flatten()
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == SOURCE_EXTENSION)
        })
        .count();

    Ok(count)
}

fn relative_to(path: &Path, workspace_root: &Path) -> PathBuf {
    pathdiff::diff_paths(path, workspace_root).unwrap_or_else(|| path.to_path_buf())
}
