//! History view formatting.
//!
//! Pure display transforms over history records; the store itself never
//! formats anything.

use chrono::{Datelike, Local, TimeZone, Timelike};

use crate::types::media::ParsedMedia;

/// A history record paired with its formatted timestamp, ready to render.
#[derive(Debug, Clone)]
pub struct HistoryViewItem {
    pub media: ParsedMedia,
    pub display_time: String,
}

/// Formats an epoch-millisecond timestamp as `month/day hour:minute` in
/// local time, minute zero-padded. Unrepresentable timestamps render as `?`.
pub fn display_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => format_parts(&dt),
        None => "?".to_string(),
    }
}

fn format_parts<T: Datelike + Timelike>(dt: &T) -> String {
    format!("{}/{} {}:{:02}", dt.month(), dt.day(), dt.hour(), dt.minute())
}

/// Maps a history list into view items for rendering.
pub fn history_view(list: Vec<ParsedMedia>) -> Vec<HistoryViewItem> {
    list.into_iter()
        .map(|media| {
            let display_time = display_time(media.timestamp);
            HistoryViewItem {
                media,
                display_time,
            }
        })
        .collect()
}
