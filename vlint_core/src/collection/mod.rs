//! Per-run diagnostic state: the file-keyed collection and the policy
//! deciding when entries are cleared, replaced, or accumulated.
//!
//! The collection is a plain owned value; callers that share it across
//! tasks must guard it (the LSP linter holds it behind a mutex for the
//! whole of each run, so one run's clear-then-repopulate sequence is never
//! preempted by another's).

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::diagnostics::{Diagnostic, DiagnosticSeverity, project_record};
use crate::extract::{OutputKind, classify_output, extract_error, extract_warnings};

/// Whether a lint run found problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintOutcome {
    /// The compiler reported nothing.
    Clean,
    /// At least one diagnostic was extracted.
    Failed,
}

/// Maps absolute file paths to their current ordered diagnostics.
///
/// Files whose diagnostics disappear during a run are remembered as
/// cleared, so editor surfaces can publish explicit empty lists for them
/// instead of leaving stale squiggles behind.
#[derive(Debug, Default)]
pub struct DiagnosticCollection {
    entries: HashMap<PathBuf, Vec<Diagnostic>>,
    cleared: HashSet<PathBuf>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run: drops every entry, for all files, and records the
    /// previous keys as cleared. A single compile invocation may have
    /// reported diagnostics in sibling files that are no longer valid.
    pub fn begin_run(&mut self) {
        self.cleared.extend(self.entries.drain().map(|(file, _)| file));
    }

    /// Removes a file's entry explicitly, marking it cleared.
    pub fn delete(&mut self, file: &Path) {
        self.entries.remove(file);
        self.cleared.insert(file.to_path_buf());
    }

    /// Replaces a file's diagnostics wholesale.
    pub fn set(&mut self, file: PathBuf, diagnostics: Vec<Diagnostic>) {
        self.cleared.remove(&file);
        self.entries.insert(file, diagnostics);
    }

    /// Appends one diagnostic to a file's list, creating it if needed.
    pub fn append(&mut self, file: PathBuf, diagnostic: Diagnostic) {
        self.cleared.remove(&file);
        self.entries.entry(file).or_default().push(diagnostic);
    }

    /// Diagnostics currently recorded for a file.
    pub fn get(&self, file: &Path) -> Option<&[Diagnostic]> {
        self.entries.get(file).map(|d| d.as_slice())
    }

    /// Files that currently have diagnostics.
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }

    /// Number of files with diagnostics.
    pub fn num_files(&self) -> usize {
        self.entries.len()
    }

    /// Takes the set of files cleared since the last call, leaving it
    /// empty. Each deserves an explicit empty publication.
    pub fn take_cleared(&mut self) -> Vec<PathBuf> {
        self.cleared.drain().collect()
    }
}

/// Applies one compiler invocation's output to the collection.
///
/// The run lifecycle in one place: clear everything, then per the output
/// layout either confirm the linted document clean (its entry is removed),
/// replace with the single fatal error, or accumulate warnings per file.
/// Record paths are relative to the compile working directory and are
/// resolved against `workspace_root` before keying.
pub fn apply_compiler_output(
    collection: &mut DiagnosticCollection,
    workspace_root: &Path,
    document: &Path,
    output: &str,
) -> LintOutcome {
    collection.begin_run();

    match classify_output(output) {
        OutputKind::Clean => {
            collection.delete(document);
            LintOutcome::Clean
        }
        OutputKind::Error => {
            let record = extract_error(output);
            let file = resolve_record_path(workspace_root, &record.file);
            let diagnostic = project_record(&record, DiagnosticSeverity::Error, file.clone());
            collection.set(file, vec![diagnostic]);
            LintOutcome::Failed
        }
        OutputKind::Warnings => {
            for record in extract_warnings(output) {
                let file = resolve_record_path(workspace_root, &record.file);
                let diagnostic =
                    project_record(&record, DiagnosticSeverity::Warning, file.clone());
                collection.append(file, diagnostic);
            }
            LintOutcome::Failed
        }
    }
}

/// Resolves a record's file field to the absolute collection key.
fn resolve_record_path(workspace_root: &Path, file: &str) -> PathBuf {
    workspace_root.join(file).clean()
}
