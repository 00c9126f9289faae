//! Extraction for warning-format compiler output.
//!
//! One invocation lists zero, one, or many warnings, interleaving terse
//! `tag:file:line:col:message` record lines with asterisk-marked
//! elaboration lines. There is no identifier linking an elaboration to its
//! record; ownership is reconstructed purely from line order.

use log::{debug, warn};

use crate::diagnostics::DiagnosticRecord;

use super::fields::{parse_number, split_fields};

/// A record line carries at least this many `:`-delimited fields; anything
/// shorter that starts with `*` is an elaboration of the preceding record.
const RECORD_FIELD_COUNT: usize = 5;

/// Line grammar for warning-format output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// Starts a new diagnostic record.
    Record,
    /// Extra detail belonging to the preceding record.
    Continuation,
    /// Whitespace only; carries nothing.
    Blank,
}

fn classify_line(line: &str, field_count: usize) -> LineKind {
    if line.is_empty() {
        LineKind::Blank
    } else if field_count < RECORD_FIELD_COUNT && line.starts_with('*') {
        LineKind::Continuation
    } else {
        LineKind::Record
    }
}

/// Extracts all diagnostic records from a warning-format blob.
///
/// Continuation lines fold into the record most recently produced when
/// they are encountered, prefixed with a newline and a single space. A
/// continuation with no preceding record is dropped and logged; it never
/// aborts extraction.
pub fn extract_warnings(output: &str) -> Vec<DiagnosticRecord> {
    let trimmed = output.trim();
    let mut records: Vec<DiagnosticRecord> = Vec::new();

    for line in trimmed.lines() {
        let line = line.trim();
        let fields = split_fields(line);

        match classify_line(line, fields.len()) {
            LineKind::Blank => {}
            LineKind::Continuation => match records.last_mut() {
                Some(record) => {
                    record.message.push_str("\n ");
                    record.message.push_str(line);
                }
                None => {
                    warn!("dropping elaboration line with no preceding record: {line:?}");
                }
            },
            LineKind::Record => {
                if fields.len() < RECORD_FIELD_COUNT {
                    debug!("warning line is missing fields: {line:?}");
                }
                records.push(DiagnosticRecord {
                    file: fields.get(1).map(|f| f.trim()).unwrap_or_default().to_string(),
                    line: fields.get(2).copied().and_then(parse_number),
                    column: fields.get(3).copied().and_then(parse_number),
                    // Exactly field 4: a message containing the delimiter
                    // loses its tail.
                    message: fields.get(4).map(|f| f.trim()).unwrap_or_default().to_string(),
                    raw_output: trimmed.to_string(),
                });
            }
        }
    }

    records
}
