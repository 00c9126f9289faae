//! Field tokenization for colon-delimited diagnostic lines.

/// Delimiter separating fields on a diagnostic line.
pub const FIELD_DELIMITER: char = ':';

/// Splits a diagnostic line into its ordered fields.
///
/// Fields are not trimmed here; callers trim the ones they keep.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).collect()
}

/// Parses a numeric field, tolerating surrounding whitespace.
///
/// Returns None for anything that is not a plain non-negative integer. The
/// None travels through extraction and projection untouched; it is never
/// coerced to a number here.
pub fn parse_number(field: &str) -> Option<u32> {
    field.trim().parse().ok()
}
