// src/services/triage.rs
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde_json::Value;

use crate::message::ConversationSummary;
use crate::services::extract::{NARRATIVE_STRATEGIES, first_populated};

/// Display format for dates, as shown by the pt-BR locale (`dd/mm/yyyy, HH:MM`).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y, %H:%M";

const LIST_MARKERS: &[char] = &['-', '*', '•'];

pub fn format_display_date(at: &DateTime<Local>) -> String {
    at.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Split a narrative into bullet lines: trimmed, list markers removed, blanks dropped.
pub fn split_key_points(narrative: &str) -> Vec<String> {
    narrative
        .lines()
        .map(|line| {
            let line = line.trim();
            match line.strip_prefix(LIST_MARKERS) {
                Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
                _ => line,
            }
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a backend timestamp. RFC 3339 first, then a naive ISO timestamp read as local time.
pub fn parse_finalized_at(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Local));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    Local.from_local_datetime(&naive).earliest()
}

pub fn resolve_display_date(finalized_at: Option<&str>, now: DateTime<Local>) -> String {
    let at = finalized_at.and_then(parse_finalized_at).unwrap_or(now);
    format_display_date(&at)
}

/// Build the displayed summary from a raw `/summary` body.
///
/// `fallback_id` is the identifier the user searched for; it is used when the
/// backend does not send `_id`.
pub fn build_summary(body: &Value, fallback_id: &str, now: DateTime<Local>) -> ConversationSummary {
    let narrative = first_populated(body, NARRATIVE_STRATEGIES).unwrap_or_default();
    let id = body
        .get("_id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback_id)
        .to_string();
    let finalized_at = body.get("finalized_at").and_then(Value::as_str);

    ConversationSummary {
        id,
        date: resolve_display_date(finalized_at, now),
        key_points: split_key_points(&narrative),
        markdown: narrative,
    }
}
