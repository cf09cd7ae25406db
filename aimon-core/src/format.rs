use chrono::{DateTime, Local};

use crate::clock::Clock;
use crate::i18n::Translate;

/// Format a count with K/M abbreviation
///
/// A million or more gets one decimal and an "M" suffix, a thousand or
/// more "K", anything smaller is rounded to a plain integer.
pub fn format_count(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{}", n.round())
    }
}

/// Format a timestamp as relative time ("just now", "5m ago"), falling
/// back to a 24-hour wall-clock reading once it is more than a day old
///
/// An absent timestamp formats as an empty string so callers can bind the
/// result straight to a label. All phrases go through the translator.
pub fn format_relative_time(
    timestamp: Option<DateTime<Local>>,
    clock: &dyn Clock,
    tr: &dyn Translate,
) -> String {
    let Some(timestamp) = timestamp else {
        return String::new();
    };

    let elapsed = clock.now().signed_duration_since(timestamp).num_seconds();
    if elapsed < 5 {
        tr.tr("just now")
    } else if elapsed < 60 {
        tr.tr_n("%1s ago", elapsed)
    } else if elapsed < 3600 {
        tr.tr_n("%1m ago", elapsed / 60)
    } else if elapsed < 86400 {
        tr.tr_n("%1h ago", elapsed / 3600)
    } else {
        timestamp.format("%H:%M:%S").to_string()
    }
}
