//! Diagnostic extraction engine for V compiler output.
//!
//! Converts the raw text a `v` invocation prints into positioned,
//! file-keyed diagnostics: classify the output layout, extract records,
//! project them into editor spans, and maintain the per-run collection
//! state. The compiler process itself is driven by the `vlint_lsp` crate;
//! everything here is pure and synchronous.

pub mod collection;
pub mod diagnostics;
pub mod extract;
pub mod target;
