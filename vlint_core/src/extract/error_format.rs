//! Extraction for error-format compiler output.
//!
//! The compiler emits at most one fatal error per run: a canonical
//! `file.v:line:col: message` line, optionally followed by elaboration
//! lines marked with an asterisk.

use log::debug;

use crate::diagnostics::DiagnosticRecord;

use super::fields::{parse_number, split_fields};

/// Marks the canonical diagnostic line: a source file name with its
/// extension, followed by the field delimiter.
const SOURCE_FILE_MARKER: &str = ".v:";

/// Marks an elaboration line carrying extra detail for the error.
const ELABORATION_MARKER: &str = " *";

/// Extracts the single diagnostic record from an error-format blob.
///
/// Best-effort and total: when the blob lacks the expected shape the record
/// comes back with empty strings and `None` numbers instead of failing the
/// run. Callers must tolerate a degenerate record.
pub fn extract_error(output: &str) -> DiagnosticRecord {
    // Blank lines are tokenizer noise; drop them before searching.
    let stripped = strip_blank_lines(output);
    let lines: Vec<&str> = stripped.lines().collect();

    let canonical = lines.iter().position(|l| l.contains(SOURCE_FILE_MARKER));
    let elaboration = lines.iter().position(|l| l.contains(ELABORATION_MARKER));

    let fields = match canonical {
        Some(index) => split_fields(lines[index]),
        None => {
            debug!("error output has no {SOURCE_FILE_MARKER} line: {output:?}");
            Vec::new()
        }
    };

    let file = fields.first().map(|f| f.trim()).unwrap_or_default();
    let line = fields.get(1).copied().and_then(parse_number);
    let column = fields.get(2).copied().and_then(parse_number);

    // The tail fields are glued back together without the delimiter, as the
    // compiler's own message may contain colons.
    let mut message = match fields.get(3..) {
        Some(rest) => rest.concat().trim().to_string(),
        None => String::new(),
    };

    if let Some(index) = elaboration {
        message.push_str(":\n");
        message.push_str(lines[index].trim());
    }

    DiagnosticRecord {
        file: file.to_string(),
        line,
        column,
        message,
        raw_output: stripped,
    }
}

/// Removes lines consisting solely of whitespace, including trailing
/// carriage returns.
fn strip_blank_lines(output: &str) -> String {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_prefix_shifts_fields() {
        // Field positions are fixed, so a leading `error:` tag lands in the
        // file slot and shifts everything after it.
        let record = extract_error("error: main.v:3:1: unexpected token");
        assert_eq!(record.file, "error");
        assert_eq!(record.line, None);
        assert_eq!(record.column, Some(3));
        assert_eq!(record.message, "1 unexpected token");
    }

    #[test]
    fn test_extracts_plain_error_line() {
        let record = extract_error("main.v:3:1: unexpected token");
        assert_eq!(record.file, "main.v");
        assert_eq!(record.line, Some(3));
        assert_eq!(record.column, Some(1));
        assert_eq!(record.message, "unexpected token");
    }

    #[test]
    fn test_message_tail_concatenated_without_delimiter() {
        let record = extract_error("main.v:3:1: unexpected token: `fn`");
        assert_eq!(record.message, "unexpected token `fn`");
    }

    #[test]
    fn test_appends_elaboration_line() {
        let output = "main.v:3:1: unexpected token\n  * expected a declaration";
        let record = extract_error(output);
        assert_eq!(
            record.message,
            "unexpected token:\n* expected a declaration"
        );
    }

    #[test]
    fn test_skips_blank_lines_before_canonical() {
        let output = "\n   \r\nmain.v:7:2: bad import\n";
        let record = extract_error(output);
        assert_eq!(record.file, "main.v");
        assert_eq!(record.line, Some(7));
        assert_eq!(record.raw_output, "main.v:7:2: bad import");
    }

    #[test]
    fn test_missing_canonical_line_yields_degenerate_record() {
        let record = extract_error("something went wrong");
        assert_eq!(record.file, "");
        assert_eq!(record.line, None);
        assert_eq!(record.column, None);
        assert_eq!(record.message, "");
    }

    #[test]
    fn test_elaboration_applies_without_canonical_line() {
        let record = extract_error("boom\n  * out of memory");
        assert_eq!(record.file, "");
        assert_eq!(record.message, ":\n* out of memory");
    }

    #[test]
    fn test_non_numeric_position_stays_none() {
        let record = extract_error("main.v:x:y: odd output");
        assert_eq!(record.file, "main.v");
        assert_eq!(record.line, None);
        assert_eq!(record.column, None);
        assert_eq!(record.message, "odd output");
    }
}
