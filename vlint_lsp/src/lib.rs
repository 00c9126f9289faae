//! Language server for V lint diagnostics.
//!
//! Runs the V compiler when a document is opened or saved, extracts
//! positioned diagnostics from its output with `vlint_core`, and publishes
//! them per file over LSP.

mod linter;
mod server;

pub use linter::{LintError, LintReport, Linter};
pub use server::VlintLspServer;
