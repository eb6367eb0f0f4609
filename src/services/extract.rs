//! Ordered extraction strategies for loosely shaped backend payloads.
//!
//! Each strategy looks at the raw JSON and either yields a non-empty string or
//! passes. Lists are tried front to back and the first hit wins.

use serde_json::Value;

pub type Extractor = fn(&Value) -> Option<String>;

/// Chat replies: `reply`, then `response`.
pub const REPLY_STRATEGIES: &[Extractor] = &[reply_field, response_field];

/// Triage narratives: `triage_summary` as a string, then `triage_summary.summary`.
pub const NARRATIVE_STRATEGIES: &[Extractor] = &[triage_summary_text, triage_summary_nested];

pub fn first_populated(value: &Value, strategies: &[Extractor]) -> Option<String> {
    strategies.iter().find_map(|strategy| strategy(value))
}

fn populated_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn reply_field(value: &Value) -> Option<String> {
    populated_str(value.get("reply"))
}

pub fn response_field(value: &Value) -> Option<String> {
    populated_str(value.get("response"))
}

pub fn triage_summary_text(value: &Value) -> Option<String> {
    populated_str(value.get("triage_summary"))
}

pub fn triage_summary_nested(value: &Value) -> Option<String> {
    populated_str(value.get("triage_summary").and_then(|t| t.get("summary")))
}

/// Phone number echoed back by the backend, if it sent a non-empty one.
pub fn echoed_phone_number(value: &Value) -> Option<String> {
    populated_str(value.get("phone_number"))
}
