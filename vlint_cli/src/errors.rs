//! Error categories for CLI command failures.
//!
//! Details are printed through `ui` at the point of failure; the category
//! only decides the exit code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    FileError,
    LintError,
    ServerError,
}
