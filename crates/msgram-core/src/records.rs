//! Utilities for records output format
//!
//! Records are single lines: a one-letter tag, then space separated fields.
//! `H` opens every output with the mode and summary fields.

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Records header line
pub fn records_header(mode: &str, extra_fields: &[(&str, String)]) -> String {
    let mut parts = vec!["H msgram=1 records=1".to_string(), format!("mode={}", mode)];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    parts.join(" ")
}

/// Records line for a named entry with an optional weight
pub fn weighted_line(tag: char, name: &str, weight: Option<u32>) -> String {
    match weight {
        Some(weight) => format!("{} \"{}\" weight={}", tag, escape_quotes(name), weight),
        None => format!("{} \"{}\"", tag, escape_quotes(name)),
    }
}

/// Records line describing a failure, written to stderr
pub fn error_line(code: u8, error_type: &str, message: &str) -> String {
    format!(
        "E code={} type={} \"{}\"",
        code,
        error_type,
        escape_quotes(message)
    )
}
