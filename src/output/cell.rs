//! Table cell formatting.
//!
//! Rules, first match wins:
//!
//! 1. A timezone-aware ISO-8601 string is shown in local time with second precision.
//! 2. A one-element list is unwrapped to its element and continues to rule 5.
//! 3. Any other list becomes `- item` lines joined by `"  \n"`; long items wrap with a
//!    two-space continuation indent.
//! 4. Booleans become `Yes` / `No`.
//! 5. Text wider than the wrap width is word-wrapped.
//! 6. Everything else is shown as is.
//!
//! JSON and CSV output never go through here.

use crate::project::NOT_AVAILABLE;
use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use serde_json::{Map, Value};
use std::num::NonZeroUsize;
use unicode_width::UnicodeWidthStr;

/// Offset-carrying layouts accepted besides RFC 3339.
const AWARE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

pub fn format_cell(value: &Value, wrap: Option<NonZeroUsize>) -> String {
    if let Some(timestamp) = value.as_str().and_then(parse_aware_datetime) {
        return to_local_seconds(&timestamp);
    }

    let width = wrap.map(NonZeroUsize::get);
    let text = match value {
        Value::Array(items) if items.len() == 1 => display_value(&items[0]),
        Value::Array(items) => return bullet_list(items, width),
        Value::Bool(flag) => return if *flag { "Yes" } else { "No" }.to_string(),
        other => display_value(other),
    };

    match width {
        Some(width) if widest_line(&text) > width => textwrap::fill(&text, width),
        _ => text,
    }
}

/// Newline-joins the sub-fields extracted for one column, in extraction order.
pub(crate) fn join_sub_fields(fields: &Map<String, Value>) -> String {
    fields
        .values()
        .map(display_value)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain string form: strings unquoted, `null` as the sentinel, everything else as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => NOT_AVAILABLE.to_string(),
        other => other.to_string(),
    }
}

fn bullet_list(items: &[Value], width: Option<usize>) -> String {
    items
        .iter()
        .map(|item| {
            let text = display_value(item);
            let text = match width {
                Some(width) if text.width() > width => {
                    textwrap::wrap(&text, width).join("\n  ")
                }
                _ => text,
            };
            format!("- {}", text)
        })
        .collect::<Vec<_>>()
        .join("  \n")
}

fn widest_line(text: &str) -> usize {
    text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn parse_aware_datetime(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp);
    }
    // chrono's offset specifiers do not take a `Z` suffix.
    let text = match text.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => text.to_string(),
    };
    AWARE_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(&text, layout).ok())
}

fn to_local_seconds(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp
        .with_timezone(&Local)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}
