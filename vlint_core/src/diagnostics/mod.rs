//! Diagnostic types for V compiler output.
//!
//! A [`DiagnosticRecord`] is the raw result of extracting one diagnostic
//! from compiler text; [`project_record`] turns it into a positioned
//! [`Diagnostic`] ready for display in an editor.

use std::path::PathBuf;

/// Source tag attached to every published diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "V";

/// One diagnostic as recovered from raw compiler output.
///
/// `line` is 1-based and `column` 0-based, exactly as the compiler reports
/// them. A numeric field the compiler printed as something unparseable stays
/// `None` rather than being coerced to a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    /// File path as printed by the compiler, relative to the compile cwd.
    pub file: String,
    /// Reported line (1-based), or None if the field did not parse.
    pub line: Option<u32>,
    /// Reported column, or None if the field did not parse.
    pub column: Option<u32>,
    pub message: String,
    /// The output blob this record was extracted from, kept for tracing.
    pub raw_output: String,
}

/// A source location span within a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    /// Resolved absolute file path.
    pub file: PathBuf,
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
}

impl SourceSpan {
    /// Creates a single-character span from a record's reported position.
    ///
    /// The compiler does not report span width, so the highlight is always
    /// exactly one character wide at the reported column. Total over
    /// degenerate records: a missing line is treated as line 1 and a
    /// missing column as column 0.
    pub fn from_record(record: &DiagnosticRecord, file: PathBuf) -> Self {
        let start_line = record.line.unwrap_or(1).saturating_sub(1);
        let start_col = record.column.unwrap_or(0);
        Self {
            file,
            start_line,
            start_col,
            end_line: start_line,
            end_col: start_col.saturating_add(1),
        }
    }
}

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A diagnostic message with source location, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub severity: DiagnosticSeverity,
    /// Always [`DIAGNOSTIC_SOURCE`]; identifies the producer in editors.
    pub source: &'static str,
    pub span: SourceSpan,
}

/// Projects a record into a positioned diagnostic for `file`.
///
/// Pure and total: degenerate records (missing numbers, empty message)
/// still produce a renderable diagnostic.
pub fn project_record(
    record: &DiagnosticRecord,
    severity: DiagnosticSeverity,
    file: PathBuf,
) -> Diagnostic {
    Diagnostic {
        message: record.message.clone(),
        severity,
        source: DIAGNOSTIC_SOURCE,
        span: SourceSpan::from_record(record, file),
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        };
        write!(
            f,
            "{}:{}:{}: {}: {}",
            self.span.file.display(),
            self.span.start_line + 1,
            self.span.start_col + 1,
            severity,
            self.message,
        )
    }
}
