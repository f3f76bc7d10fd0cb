//! Utilities for records output format

use crate::graph::Cost;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Render a cost as a records field value (`inf` when unreachable)
pub fn format_cost(cost: Cost) -> String {
    if cost.is_finite() {
        cost.to_string()
    } else {
        "inf".to_string()
    }
}

/// Build the `H` header line shared by every records command
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H waypoint=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}
