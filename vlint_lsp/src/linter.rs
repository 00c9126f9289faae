//! Lint run orchestration: invoke the V compiler, extract diagnostics from
//! its output, and update the owned collection.

use std::path::{Path, PathBuf};
use std::{fmt, io};

use log::{debug, warn};
use tokio::process::Command;
use tokio::sync::Mutex;

use vlint_core::collection::{DiagnosticCollection, LintOutcome, apply_compiler_output};
use vlint_core::diagnostics::Diagnostic;
use vlint_core::target::{TargetError, resolve_compile_target};

/// Scratch directory for the compiler's `-o` output.
const SCRATCH_DIR: &str = "vlint";
/// The compile artifact; only the diagnostics matter, never this file.
const SCRATCH_FILE: &str = "lint.c";
/// Default name of the V compiler executable.
const DEFAULT_EXECUTABLE: &str = "v";

/// Errors that abort a lint run before any diagnostics are produced.
#[derive(Debug)]
pub enum LintError {
    /// The compile target could not be resolved.
    Target(TargetError),
    /// The compiler process could not be started. Prior diagnostics are
    /// left untouched: a clean result that was never verified is not
    /// asserted.
    Spawn(io::Error),
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintError::Target(error) => {
                write!(f, "Could not resolve compile target: {}", error)
            }
            LintError::Spawn(error) => {
                write!(f, "Could not start the V compiler: {}", error)
            }
        }
    }
}

/// The result of one completed lint run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub outcome: LintOutcome,
    /// Per-file diagnostic lists to publish, sorted by path. Files whose
    /// diagnostics were cleared by this run appear with an empty list.
    pub publish: Vec<(PathBuf, Vec<Diagnostic>)>,
}

/// Owns the diagnostic collection and drives compile-and-extract runs.
///
/// The collection lock is held for the whole of each run, so one run's
/// clear-then-repopulate sequence is never interleaved with another's.
pub struct Linter {
    executable: PathBuf,
    workspace_root: PathBuf,
    scratch_file: PathBuf,
    collection: Mutex<DiagnosticCollection>,
}

impl Linter {
    /// Creates a linter using the `v` executable from PATH.
    pub fn new(workspace_root: PathBuf) -> Self {
        Self::with_executable(PathBuf::from(DEFAULT_EXECUTABLE), workspace_root)
    }

    /// Creates a linter running a specific compiler executable.
    pub fn with_executable(executable: PathBuf, workspace_root: PathBuf) -> Self {
        let scratch_dir = std::env::temp_dir().join(SCRATCH_DIR);
        if let Err(error) = std::fs::create_dir_all(&scratch_dir) {
            warn!(
                "Could not create scratch directory {}: {}",
                scratch_dir.display(),
                error
            );
        }
        Self {
            executable,
            workspace_root,
            scratch_file: scratch_dir.join(SCRATCH_FILE),
            collection: Mutex::new(DiagnosticCollection::new()),
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Lints one document: compiles its target and replaces the collection
    /// contents with whatever diagnostics the compiler reports.
    pub async fn lint(&self, document: &Path) -> Result<LintReport, LintError> {
        let target =
            resolve_compile_target(document, &self.workspace_root).map_err(LintError::Target)?;
        debug!(
            "linting {} via target {}",
            document.display(),
            target.display()
        );

        let mut collection = self.collection.lock().await;

        let output = Command::new(&self.executable)
            .arg("-o")
            .arg(&self.scratch_file)
            .arg(&target)
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(LintError::Spawn)?;

        let combined = select_output(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        );

        let outcome =
            apply_compiler_output(&mut collection, &self.workspace_root, document, &combined);

        let mut publish: Vec<(PathBuf, Vec<Diagnostic>)> = collection
            .take_cleared()
            .into_iter()
            .map(|file| (file, Vec::new()))
            .collect();
        publish.extend(collection.files().map(|file| {
            let diagnostics = collection.get(file).map(|d| d.to_vec()).unwrap_or_default();
            (file.clone(), diagnostics)
        }));
        publish.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(LintReport { outcome, publish })
    }
}

/// Picks the text to parse from a finished invocation: stderr when the
/// compiler wrote anything there, stdout otherwise.
fn select_output(stdout: String, stderr: String) -> String {
    if stderr.is_empty() { stdout } else { stderr }
}
